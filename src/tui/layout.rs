//! Layout definitions for the TUI
//!
//! Stacks the screen vertically: header with the party strip, expense form,
//! share panel, ledger table and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and party strip
    pub header: Rect,
    /// Description and amount inputs
    pub form: Rect,
    /// Share bar, split preview and per-party shares
    pub shares: Rect,
    /// Recorded expenses
    pub ledger: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area and the current party count
    pub fn new(area: Rect, party_count: usize) -> Self {
        // bar + preview + one row per party, inside a border
        let shares_height = (party_count as u16).saturating_add(4);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Header
                Constraint::Length(4),             // Form
                Constraint::Length(shares_height), // Shares
                Constraint::Min(5),                // Ledger
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            shares: chunks[2],
            ledger: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Layout inside the shares panel
pub struct SharesLayout {
    /// Proportional bar
    pub bar: Rect,
    /// Split preview for the amount being typed
    pub preview: Rect,
    /// One row per party
    pub rows: Rect,
}

impl SharesLayout {
    /// Calculate the shares panel layout (inner area, without borders)
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Bar
                Constraint::Length(1), // Preview
                Constraint::Min(0),    // Rows
            ])
            .split(area);

        Self {
            bar: chunks[0],
            preview: chunks[1],
            rows: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = AppLayout::new(area, 3);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.form.height, 4);
        assert_eq!(layout.shares.height, 7);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(
            layout.header.height
                + layout.form.height
                + layout.shares.height
                + layout.ledger.height
                + layout.status_bar.height,
            40
        );
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 70, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
    }
}
