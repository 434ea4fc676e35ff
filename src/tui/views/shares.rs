//! Shares view
//!
//! Shows the proportional bar, a live split preview for the amount being
//! typed and one slider row per party.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_percentage;
use crate::tui::app::{App, Focus};
use crate::tui::layout::SharesLayout;
use crate::tui::widgets::{party_color, ShareBar};

/// Render the shares panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Parties;
    let title = format!(" Shares ({}) ", app.session.mode());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let layout = SharesLayout::new(inner);
    let allocation = app.session.allocation();
    let count = allocation.len();
    let symbol = app.settings.currency_symbol.as_str();

    frame.render_widget(ShareBar::new(allocation), layout.bar);

    let preview = app.session.preview(app.amount.value());
    let mut preview_spans = Vec::with_capacity(preview.len() * 2);
    for (index, split) in preview.iter().enumerate() {
        if index > 0 {
            preview_spans.push(Span::raw("  "));
        }
        preview_spans.push(Span::styled(
            format!("{}: {}", split.party, split.amount.format_with_symbol(symbol)),
            Style::default().fg(party_color(index, count)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(preview_spans)), layout.preview);

    // Slider track width leaves room for marker, id and percentage
    let track_width = (layout.rows.width as usize).saturating_sub(14);
    let lines: Vec<Line> = allocation
        .parties()
        .iter()
        .enumerate()
        .map(|(index, party)| {
            let selected = focused && index == app.selected_party;
            let filled = ((party.percentage / 100.0) * track_width as f64).round() as usize;
            let filled = filled.min(track_width);
            let color = party_color(index, count);

            let label_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };

            Line::from(vec![
                Span::raw(if selected { "> " } else { "  " }),
                Span::styled(format!(" {} ", party.id), label_style),
                Span::raw(" "),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(track_width - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(" {:>6}", format_percentage(party.percentage))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout.rows);
}
