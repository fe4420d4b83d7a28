//! Button component for the web UI.
//!
//! Provides a configurable button component that renders as either
//! a `<button>` or `<a>` element based on whether an href is provided.

use maud::{html, Markup, Render};

/// Button style variants matching CSS classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled button - `.btn`
    #[default]
    Primary,
    /// Outlined, transparent button - `.btn.ghost`
    Ghost,
    /// Destructive action - `.btn.danger`
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class(es) for this variant.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn",
            Self::Ghost => "btn ghost",
            Self::Danger => "btn danger",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let read = Button::primary("Read").href("/post/1/");
/// let delete = Button::ghost("Delete")
///     .href("/delete/1/")
///     .onclick("return confirm('Delete this post?')");
/// let submit = Button::primary("Create").r#type("submit");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    /// Button label text
    pub label: &'a str,
    /// Button style variant
    pub variant: ButtonVariant,
    /// Optional href (renders as `<a>` if present)
    pub href: Option<&'a str>,
    /// Button type attribute (for `<button>` elements)
    pub r#type: Option<&'a str>,
    /// JavaScript onclick handler
    pub onclick: Option<&'a str>,
}

impl<'a> Button<'a> {
    /// Creates a new button with the given label and variant.
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
            onclick: None,
        }
    }

    /// Creates a primary button.
    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    /// Creates a ghost button.
    #[must_use]
    pub fn ghost(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Ghost)
    }

    /// Creates a danger button.
    #[must_use]
    pub fn danger(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Danger)
    }

    /// Sets the href, rendering the button as an `<a>` element.
    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    /// Sets the button type attribute.
    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Sets the onclick handler.
    #[must_use]
    pub fn onclick(mut self, onclick: &'a str) -> Self {
        self.onclick = Some(onclick);
        self
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let class = self.variant.class();

        if let Some(href) = self.href {
            html! {
                a class=(class) href=(href) onclick=[self.onclick] {
                    (self.label)
                }
            }
        } else {
            html! {
                button class=(class) type=(self.r#type.unwrap_or("button")) onclick=[self.onclick] {
                    (self.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        let html = Button::primary("Click me").render().into_string();
        assert!(html.contains("class=\"btn\""));
        assert!(html.contains("Click me"));
        assert!(html.contains("<button"));
        assert!(html.contains("type=\"button\""));
    }

    #[test]
    fn test_button_with_href() {
        let html = Button::ghost("Edit").href("/edit/3/").render().into_string();
        assert!(html.contains("<a"));
        assert!(html.contains("class=\"btn ghost\""));
        assert!(html.contains("href=\"/edit/3/\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_submit_button_with_onclick() {
        let html = Button::danger("Delete")
            .r#type("submit")
            .onclick("return confirm('Sure?')")
            .render()
            .into_string();
        assert!(html.contains("btn danger"));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("onclick=\"return confirm('Sure?')\""));
    }
}
