//! Status bar view
//!
//! Shows the party count, rebalance mode, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Parties: ", Style::default().fg(Color::White)),
        Span::styled(
            app.session.allocation().len().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.session.mode().to_string(),
            Style::default().fg(Color::Magenta),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.focus {
        Focus::Parties => " │ ←/→:Adjust  +/-:Party  r:Reset  m:Mode  ?:Help  q:Quit",
        Focus::Description | Focus::Amount => " │ Tab:Next  Enter:Record  Esc:Shares",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
