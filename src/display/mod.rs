//! Display formatting for terminal output
//!
//! Provides utilities for formatting allocations, split previews and the
//! ledger for the CLI commands.

pub mod allocation;
pub mod ledger;

pub use allocation::{format_allocation, format_share_bar, format_splits, segment_widths};
pub use ledger::format_ledger_table;

/// Format a percentage to one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
