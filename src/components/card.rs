//! Card components for post listings.

use maud::{html, Markup, Render};

use super::button::Button;
use crate::db::Post;

/// Confirmation prompt shown by the browser before following a delete link.
pub const DELETE_CONFIRM_JS: &str = "return confirm('Delete this post?')";

/// A listing card showing one post's metadata and excerpt.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub excerpt: &'a str,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post, excerpt: &'a str) -> Self {
        Self { post, excerpt }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let view_url = format!("/post/{}/", post.id);
        let edit_url = format!("/edit/{}/", post.id);
        let delete_url = format!("/delete/{}/", post.id);

        html! {
            article class="post" {
                div class="meta" { (post.created_at) " • " (post.author_display()) }
                h3 { a href=(view_url) { (post.title) } }
                p { (self.excerpt) }
                div class="actions" {
                    (Button::primary("Read").href(&view_url))
                    (Button::ghost("Edit").href(&edit_url))
                    (Button::ghost("Delete").href(&delete_url).onclick(DELETE_CONFIRM_JS))
                }
            }
        }
    }
}

/// Placeholder shown when a listing has nothing to show.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
    pub link: Option<(&'a str, &'a str)>,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self {
            message,
            link: None,
        }
    }

    /// Follow the message with a link (`href`, `label`).
    #[must_use]
    pub const fn with_link(mut self, href: &'a str, label: &'a str) -> Self {
        self.link = Some((href, label));
        self
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" {
                (self.message)
                @if let Some((href, label)) = self.link {
                    " "
                    a href=(href) { (label) } "."
                }
            }
        }
    }
}
