//! Create/edit form page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, Form, Input, TextArea};
use crate::db::Post;

/// Whether the form creates a new post or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Label used for the page title and submit button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Edit",
        }
    }
}

/// Parameters for the post form page.
#[derive(Debug, Clone)]
pub struct PostFormParams<'a> {
    pub site_title: &'a str,
    pub mode: FormMode,
    /// URL the form posts back to.
    pub action: &'a str,
    /// Existing post for pre-filling the fields (edit mode).
    pub post: Option<&'a Post>,
}

impl<'a> PostFormParams<'a> {
    /// Empty form posting to `/create/`.
    #[must_use]
    pub const fn create(site_title: &'a str) -> Self {
        Self {
            site_title,
            mode: FormMode::Create,
            action: "/create/",
            post: None,
        }
    }

    /// Form pre-filled from `post`, posting to `action`.
    #[must_use]
    pub const fn edit(site_title: &'a str, action: &'a str, post: &'a Post) -> Self {
        Self {
            site_title,
            mode: FormMode::Edit,
            action,
            post: Some(post),
        }
    }
}

/// Render the post form.
#[must_use]
pub fn render_post_form_page(params: &PostFormParams<'_>) -> Markup {
    let label = params.mode.label();
    let title = params.post.map(|p| p.title.as_str());
    let author = params.post.and_then(|p| p.author.as_deref());
    let body = params.post.map(|p| p.content.as_str());

    let fields = html! {
        (Input::text("title").value_opt(title).placeholder("Title").required())
        (Input::text("author").value_opt(author).placeholder("Author"))
        (TextArea::new("content")
            .value_opt(body)
            .rows(10)
            .placeholder("Write your post")
            .required())
        div class="actions" {
            (Button::primary(label).r#type("submit"))
            (Button::ghost("Cancel").href("/"))
        }
    };

    let content = html! {
        div class="post" {
            (Form::post(params.action, fields))
        }
    };

    BaseLayout::new(&format!("{label} Post"), params.site_title).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_form_is_empty() {
        let html = render_post_form_page(&PostFormParams::create("My Blog")).into_string();

        assert!(html.contains("<title>Create Post - My Blog</title>"));
        assert!(html.contains("action=\"/create/\""));
        assert!(html.contains("method=\"post\""));
        assert!(!html.contains("value="));
        assert!(html.contains("type=\"submit\""));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let post = Post {
            id: 4,
            title: "Old title".to_string(),
            author: None,
            content: "Old body".to_string(),
            created_at: "2024-01-15 12:00:00".to_string(),
        };
        let params = PostFormParams::edit("My Blog", "/edit/4/", &post);
        let html = render_post_form_page(&params).into_string();

        assert!(html.contains("<title>Edit Post - My Blog</title>"));
        assert!(html.contains("action=\"/edit/4/\""));
        assert!(html.contains("value=\"Old title\""));
        assert!(html.contains(">Old body</textarea>"));
        // An absent author leaves the field blank rather than "Anonymous".
        assert!(!html.contains("Anonymous"));
    }
}
