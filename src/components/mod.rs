//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout with header and footer
//! - `button`: Button and link-button components
//! - `card`: Post listing cards and the empty state
//! - `form`: Form elements and input components

pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use button::{Button, ButtonVariant};
pub use card::{EmptyState, PostCard, DELETE_CONFIRM_JS};
pub use form::{Form, Input, TextArea};
pub use layout::BaseLayout;
