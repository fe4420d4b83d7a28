//! Post detail page.

use maud::{html, Markup};

use crate::components::{BaseLayout, Button, DELETE_CONFIRM_JS};
use crate::db::Post;

/// Parameters for the post detail page.
#[derive(Debug, Clone)]
pub struct PostPageParams<'a> {
    pub site_title: &'a str,
    pub post: &'a Post,
}

/// Render a single post with its full body.
#[must_use]
pub fn render_post_page(params: &PostPageParams<'_>) -> Markup {
    let post = params.post;
    let edit_url = format!("/edit/{}/", post.id);
    let delete_url = format!("/delete/{}/", post.id);

    let content = html! {
        article class="post" {
            div class="meta" { (post.created_at) " • " (post.author_display()) }
            h2 { (post.title) }
            div class="post-body" { (post.content) }
            div class="actions" {
                (Button::ghost("Edit").href(&edit_url))
                (Button::ghost("Delete").href(&delete_url).onclick(DELETE_CONFIRM_JS))
                (Button::primary("Back").href("/"))
            }
        }
    };

    BaseLayout::new(&post.title, params.site_title).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: 3,
            title: "Test Post Title".to_string(),
            author: Some("testauthor".to_string()),
            content: "First line\nSecond <b>line</b>".to_string(),
            created_at: "2024-01-15 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_post_page_contents() {
        let post = sample_post();
        let html = render_post_page(&PostPageParams {
            site_title: "My Blog",
            post: &post,
        })
        .into_string();

        assert!(html.contains("<title>Test Post Title - My Blog</title>"));
        assert!(html.contains("testauthor"));
        assert!(html.contains("2024-01-15 12:00:00"));
        assert!(html.contains("First line\nSecond &lt;b&gt;line&lt;/b&gt;"));
        assert!(html.contains("href=\"/edit/3/\""));
        assert!(html.contains("href=\"/delete/3/\""));
    }

    #[test]
    fn test_post_page_anonymous_author() {
        let post = Post {
            author: None,
            ..sample_post()
        };
        let html = render_post_page(&PostPageParams {
            site_title: "My Blog",
            post: &post,
        })
        .into_string();

        assert!(html.contains("• Anonymous"));
    }
}
