//! Expense form view
//!
//! Description and amount inputs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;

/// Render the expense form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focus.is_text() {
        Color::Cyan
    } else {
        Color::White
    };
    let block = Block::default()
        .title(" New Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(&app.description, rows[0]);
    frame.render_widget(&app.amount, rows[1]);
}
