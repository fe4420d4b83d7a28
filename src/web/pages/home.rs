//! Home page: the list of posts, newest first.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, EmptyState, PostCard};
use crate::db::Post;
use crate::excerpt::excerpt;

/// A post paired with its listing excerpt.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub post: Post,
    pub excerpt: String,
}

impl PostSummary {
    #[must_use]
    pub fn new(post: Post, excerpt_length: usize) -> Self {
        let excerpt = excerpt(&post.content, excerpt_length);
        Self { post, excerpt }
    }
}

/// Parameters for the home page.
#[derive(Debug, Clone)]
pub struct HomePageParams<'a> {
    pub site_title: &'a str,
    pub posts: &'a [PostSummary],
}

/// Render the post listing.
#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let content = html! {
        div class="page-head" {
            h2 { "Latest posts" }
            div { (Button::primary("Create Post").href("/create/")) }
        }

        @if params.posts.is_empty() {
            (EmptyState::new("No posts yet.").with_link("/create/", "Create the first post"))
        } @else {
            @for summary in params.posts {
                (PostCard::new(&summary.post, &summary.excerpt))
            }
        }
    };

    BaseLayout::new("Home", params.site_title).render(content)
}
