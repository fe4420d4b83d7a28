//! Maud-based page templates for the web UI.
//!
//! Each page module exports a typed parameter struct and a render function
//! that produces the complete HTML.

pub mod delete;
pub mod editor;
pub mod home;
pub mod post;

pub use delete::{render_confirm_delete_page, ConfirmDeleteParams};
pub use editor::{render_post_form_page, FormMode, PostFormParams};
pub use home::{render_home_page, HomePageParams, PostSummary};
pub use post::{render_post_page, PostPageParams};
