use super::StoreError;

/// Display name used when a post has no author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A blog post as stored in the `posts` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub content: String,
    /// UTC creation time, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
}

impl Post {
    /// Author name for display, falling back to [`ANONYMOUS_AUTHOR`].
    #[must_use]
    pub fn author_display(&self) -> &str {
        self.author.as_deref().unwrap_or(ANONYMOUS_AUTHOR)
    }
}

/// Validated title/author/content accepted by the create and update queries.
///
/// Fields are trimmed; `title` and `content` are guaranteed non-empty and a
/// blank author becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    author: Option<String>,
    content: String,
}

impl PostDraft {
    /// Build a draft from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidInput`] if `title` or `content` is empty
    /// or whitespace-only.
    pub fn new(title: &str, author: Option<&str>, content: &str) -> Result<Self, StoreError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("title is required"));
        }
        if content.is_empty() {
            return Err(StoreError::InvalidInput("content is required"));
        }

        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        Ok(Self {
            title: title.to_string(),
            author,
            content: content.to_string(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_fields() {
        let draft = PostDraft::new("  Hello ", Some("  ann  "), "\n body \n").unwrap();
        assert_eq!(draft.title(), "Hello");
        assert_eq!(draft.author(), Some("ann"));
        assert_eq!(draft.content(), "body");
    }

    #[test]
    fn test_draft_blank_author_is_none() {
        let draft = PostDraft::new("A", Some("   "), "B").unwrap();
        assert_eq!(draft.author(), None);

        let draft = PostDraft::new("A", None, "B").unwrap();
        assert_eq!(draft.author(), None);
    }

    #[test]
    fn test_draft_rejects_empty_title_or_content() {
        assert!(PostDraft::new("", Some("x"), "body")
            .unwrap_err()
            .is_invalid_input());
        assert!(PostDraft::new("title", Some("x"), "   ")
            .unwrap_err()
            .is_invalid_input());
        assert!(PostDraft::new(" \t ", None, "body")
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_draft_keeps_inner_line_breaks() {
        let draft = PostDraft::new("T", None, "line one\nline two\n\nline four").unwrap();
        assert_eq!(draft.content(), "line one\nline two\n\nline four");
    }

    #[test]
    fn test_author_display() {
        let mut post = Post {
            id: 1,
            title: "T".to_string(),
            author: None,
            content: "C".to_string(),
            created_at: "2024-01-15 12:00:00".to_string(),
        };
        assert_eq!(post.author_display(), "Anonymous");

        post.author = Some("ann".to_string());
        assert_eq!(post.author_display(), "ann");
    }
}
