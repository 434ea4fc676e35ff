//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the main screen

pub mod help;
