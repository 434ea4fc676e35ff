//! Help dialog
//!
//! Shows keyboard shortcuts, with the section for the focused area first

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Ctrl+c", "Quit application"),
        Line::from(""),
    ];

    let expense = [
        section("Expense Form"),
        Line::from(""),
        key_line("Enter", "Record the expense"),
        key_line("Esc", "Jump to the shares"),
        Line::from(""),
    ];

    let step = app.settings.percentage_step;
    let shares = [
        section("Shares"),
        Line::from(""),
        key_line("j/k", "Select party"),
        key_line("h/l", &format!("Adjust share by {}%", step)),
        key_line("H/L", &format!("Adjust share by {}%", step * 10.0)),
        key_line("0/Home", "Set share to 0%"),
        key_line("End", "Set share to 100%"),
        key_line("+/a", "Add a party"),
        key_line("-/d", "Remove the last party"),
        key_line("r", "Reset to an even split"),
        key_line("m", "Toggle pinned/proportional"),
        key_line("?", "Show/hide help"),
        key_line("q/Esc", "Quit application"),
        Line::from(""),
    ];

    if app.focus == Focus::Parties {
        lines.extend(shares);
        lines.extend(expense);
    } else {
        lines.extend(expense);
        lines.extend(shares);
    }

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
