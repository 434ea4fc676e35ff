//! Allocation display formatting
//!
//! Formats party shares and split previews for terminal output.

use crate::models::{Money, PartyAllocation, Split};

use super::format_percentage;

/// Width in cells of each party's segment in a bar of `width` cells
///
/// Segment edges are placed at the rounded cumulative share, so the widths
/// always add up to exactly `width`.
pub fn segment_widths(allocation: &PartyAllocation, width: usize) -> Vec<usize> {
    let mut widths = Vec::with_capacity(allocation.len());
    let mut cumulative = 0.0;
    let mut previous_edge = 0usize;
    let total = allocation.total();

    for party in allocation.parties() {
        cumulative += party.percentage;
        let edge = if total > 0.0 {
            ((cumulative / total) * width as f64).round() as usize
        } else {
            0
        };
        let edge = edge.clamp(previous_edge, width);
        widths.push(edge - previous_edge);
        previous_edge = edge;
    }

    if let Some(last) = widths.last_mut() {
        *last += width - previous_edge;
    }
    widths
}

/// Text bar where each party's segment is drawn with its letter
pub fn format_share_bar(allocation: &PartyAllocation, width: usize) -> String {
    allocation
        .parties()
        .iter()
        .zip(segment_widths(allocation, width))
        .map(|(party, w)| party.id.as_char().to_string().repeat(w))
        .collect()
}

/// Format the allocation as one line per party with its share
pub fn format_allocation(allocation: &PartyAllocation) -> String {
    let mut output = String::new();
    for party in allocation.parties() {
        output.push_str(&format!(
            "{}  {:>6}\n",
            party.id,
            format_percentage(party.percentage)
        ));
    }
    output
}

/// Format how one amount splits between the parties
pub fn format_splits(
    amount: Money,
    splits: &[Split],
    allocation: &PartyAllocation,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<6}  {:>7}  {:>12}\n",
        "Party", "Share", "Amount"
    ));
    output.push_str(&format!("{:-<6}  {:->7}  {:->12}\n", "", "", ""));

    for split in splits {
        let share = allocation
            .get(split.party)
            .map(|p| format_percentage(p.percentage))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:<6}  {:>7}  {:>12}\n",
            split.party.to_string(),
            share,
            split.amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!("{:-<6}  {:->7}  {:->12}\n", "", "", ""));
    output.push_str(&format!(
        "{:<6}  {:>7}  {:>12}\n",
        "Total",
        "",
        amount.format_with_symbol(symbol)
    ));
    output
}
