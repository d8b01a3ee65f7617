//! Reusable TUI widgets.

pub mod form;
pub mod summary;

pub use form::{Form, FormField, draw_form};
pub use summary::draw_summary;
