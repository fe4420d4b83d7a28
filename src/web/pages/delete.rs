//! Delete confirmation page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, Form};
use crate::db::Post;

/// Parameters for the delete confirmation page.
#[derive(Debug, Clone)]
pub struct ConfirmDeleteParams<'a> {
    pub site_title: &'a str,
    pub post: &'a Post,
}

/// Render the "are you sure" prompt for deleting a post.
#[must_use]
pub fn render_confirm_delete_page(params: &ConfirmDeleteParams<'_>) -> Markup {
    let action = format!("/delete/{}/", params.post.id);

    let buttons = html! {
        div class="actions" {
            (Button::danger("Delete").r#type("submit"))
            (Button::ghost("Cancel").href("/"))
        }
    };

    let content = html! {
        div class="post" {
            h3 { "Delete Post" }
            p { "Are you sure you want to delete \"" (params.post.title) "\"?" }
            (Form::post(&action, buttons))
        }
    };

    BaseLayout::new("Delete Post", params.site_title).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_delete_page() {
        let post = Post {
            id: 9,
            title: "Doomed".to_string(),
            author: None,
            content: "Body".to_string(),
            created_at: "2024-01-15 12:00:00".to_string(),
        };
        let html = render_confirm_delete_page(&ConfirmDeleteParams {
            site_title: "My Blog",
            post: &post,
        })
        .into_string();

        assert!(html.contains("Are you sure you want to delete"));
        assert!(html.contains("Doomed"));
        assert!(html.contains("action=\"/delete/9/\""));
        assert!(html.contains("method=\"post\""));
    }
}
