//! Ledger view
//!
//! Recorded expenses, newest first, with the local time each was recorded
//! and one column per party

use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Expense;
use crate::tui::app::App;

/// Render the expense ledger
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.session.ledger();
    let symbol = app.settings.currency_symbol.as_str();

    let title = format!(
        " Ledger ({}) - {} ",
        ledger.len(),
        ledger.total().format_with_symbol(symbol)
    );
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if ledger.is_empty() {
        let text = Paragraph::new("No expenses yet. Type a description and amount, then press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let parties = ledger.parties();

    let mut widths = vec![
        Constraint::Length(5),
        Constraint::Min(16),
        Constraint::Length(12),
    ];
    widths.extend(parties.iter().map(|_| Constraint::Length(11)));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut header_cells = vec![
        Cell::from("Time").style(bold),
        Cell::from("Expense").style(bold),
        Cell::from("Amount").style(bold),
    ];
    header_cells.extend(parties.iter().map(|p| Cell::from(p.to_string()).style(bold)));
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows: Vec<Row> = ledger
        .expenses()
        .iter()
        .rev()
        .map(|expense| {
            let mut cells = vec![
                Cell::from(recorded_time(expense))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(expense.description.clone()),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Green)),
            ];
            cells.extend(parties.iter().map(|p| {
                let text = expense
                    .split_for(*p)
                    .map(|m| m.format_with_symbol(symbol))
                    .unwrap_or_else(|| "-".to_string());
                Cell::from(text)
            }));
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}

/// Local wall-clock time an expense was recorded, as `HH:MM`
pub fn recorded_time(expense: &Expense) -> String {
    expense
        .recorded_at
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string()
}
