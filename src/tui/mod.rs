//! Terminal User Interface module
//!
//! This module provides the interactive splitter using ratatui: a party
//! strip, an expense form, share sliders with a live preview and the
//! running ledger.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
