//! Base layout components for the web UI.
//!
//! This module provides the page skeleton shared by every page: the HTML
//! head with the inline stylesheet, the site header and the footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Site stylesheet, inlined so the app serves no static files.
const SITE_STYLE: &str = r#"
body{font-family:Inter,system-ui,-apple-system,"Segoe UI",Roboto,"Helvetica Neue",Arial;margin:0;padding:0;background:#f7f7fb;color:#111}
header.site-header{background:linear-gradient(90deg,#4f46e5,#06b6d4);color:white;padding:28px 18px}
.container{max-width:900px;margin:24px auto;padding:0 18px}
h1{margin:0;font-size:28px}
.post{background:white;border-radius:12px;padding:18px;margin-bottom:14px;box-shadow:0 6px 18px rgba(15,23,42,0.06)}
.meta{color:#6b7280;font-size:13px;margin-bottom:10px}
a{color:#334155;text-decoration:none}
.site-title{color:inherit}
.actions{margin-top:12px;display:flex;gap:8px;align-items:center}
.page-head{display:flex;justify-content:space-between;align-items:center;margin-bottom:12px}
.post-body{white-space:pre-wrap;margin-top:12px}
form input[type=text],form textarea{width:100%;box-sizing:border-box;padding:10px;border:1px solid #e6e9ee;border-radius:8px;margin-bottom:8px}
.btn{display:inline-block;padding:8px 12px;border-radius:8px;border:0;background:#4f46e5;color:white;cursor:pointer;font-size:14px}
.btn.ghost{background:transparent;color:#374151;border:1px solid #e6e9ee}
.btn.danger{background:#dc2626}
footer{color:#6b7280;font-size:13px;text-align:center;padding:24px 0}
@media (max-width:640px){h1{font-size:22px}}
"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h2 { "Hello World" } };
/// let page = BaseLayout::new("Home", "My Blog").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    site_title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title and site title.
    #[must_use]
    pub fn new(title: &'a str, site_title: &'a str) -> Self {
        Self { title, site_title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width,initial-scale=1";
                    title { (self.title) " - " (self.site_title) }
                    style { (PreEscaped(SITE_STYLE)) }
                }
                body {
                    (self.render_header())
                    main class="container" {
                        (content)
                    }
                    (self.render_footer())
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="site-header" {
                div class="container" {
                    h1 {
                        a class="site-title" href="/" { (self.site_title) }
                    }
                }
            }
        }
    }

    fn render_footer(&self) -> Markup {
        html! {
            footer {
                div class="container" {
                    p { (self.site_title) " | Rust + SQLite" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_content() {
        let page = BaseLayout::new("Home", "My Blog")
            .render(html! { p { "inner" } })
            .into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Home - My Blog</title>"));
        assert!(page.contains("<main class=\"container\"><p>inner</p></main>"));
        assert!(page.contains("href=\"/\""));
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = BaseLayout::new("<script>", "Blog")
            .render(html! {})
            .into_string();
        assert!(page.contains("&lt;script&gt; - Blog"));
    }
}
