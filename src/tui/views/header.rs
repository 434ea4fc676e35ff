//! Header view
//!
//! Title plus the strip of party labels, with the selected party highlighted

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::widgets::party_color;

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Splitsy ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let allocation = app.session.allocation();
    let count = allocation.len();
    let parties_focused = app.focus == Focus::Parties;

    let mut spans = Vec::with_capacity(count * 2 + 4);
    for (index, party) in allocation.parties().iter().enumerate() {
        let mut style = Style::default()
            .fg(party_color(index, count))
            .add_modifier(Modifier::BOLD);
        if index == app.selected_party && parties_focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[{}]", party.id), style));
        spans.push(Span::raw(" "));
    }

    let add_style = if allocation.is_full() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Green)
    };
    let remove_style = if allocation.at_minimum() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };
    spans.push(Span::styled("[+]", add_style));
    spans.push(Span::raw(" "));
    spans.push(Span::styled("[-]", remove_style));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
