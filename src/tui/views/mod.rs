//! TUI Views module
//!
//! Contains the screen sections: header, expense form, share panel, ledger
//! and status bar.

pub mod form;
pub mod header;
pub mod ledger;
pub mod shares;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area(), app.session.allocation().len());

    header::render(frame, app, layout.header);
    form::render(frame, app, layout.form);
    shares::render(frame, app, layout.shares);
    ledger::render(frame, app, layout.ledger);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
