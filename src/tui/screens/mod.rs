//! TUI screen implementations.

pub mod application;
pub mod help;

pub use application::{ApplicationFormState, draw_application};
pub use help::{HelpState, draw_help};
