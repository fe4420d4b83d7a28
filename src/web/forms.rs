use crate::db::{PostDraft, StoreError};

/// Fields submitted by the create and edit forms.
///
/// Built from the raw urlencoded pairs: missing fields stay empty so that
/// validation, not extraction, decides what a bad submission looks like, a
/// repeated field keeps its last value and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl FromIterator<(String, String)> for PostForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            match name.as_str() {
                "title" => form.title = value,
                "author" => form.author = value,
                "content" => form.content = value,
                _ => {}
            }
        }
        form
    }
}

impl PostForm {
    /// Validate the submission into a storable draft.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] when the title or content is blank.
    pub fn into_draft(self) -> Result<PostDraft, StoreError> {
        PostDraft::new(&self.title, Some(&self.author), &self.content)
    }
}
