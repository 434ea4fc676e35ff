//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod share_bar;

pub use input::TextInput;
pub use share_bar::{party_color, ShareBar};
