//! Split calculator
//!
//! Turns an expense total and the current allocation into per-party amounts,
//! and records expenses in the ledger.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::error::{SplitsyError, SplitsyResult};
use crate::models::{Expense, ExpenseLedger, Money, PartyAllocation, Split};

/// Divide `amount` between the parties of `allocation`
///
/// Returns one split per party in allocation order. Each party receives
/// `amount * percentage / 100` rounded to whole cents with the largest
/// remainder method: every exact share is floored and the leftover cents go
/// to the parties with the largest fractional parts (earlier parties win
/// ties). The splits therefore sum to exactly `amount` and are never negative.
///
/// A non-positive `amount` yields a zero split for every party.
pub fn compute_splits(amount: Money, allocation: &PartyAllocation) -> Vec<Split> {
    let parties = allocation.parties();
    if !amount.is_positive() {
        return parties
            .iter()
            .map(|p| Split::new(p.id, Money::zero()))
            .collect();
    }

    let total_cents = amount.cents();
    let exact: Vec<f64> = parties
        .iter()
        .map(|p| total_cents as f64 * p.percentage.max(0.0) / 100.0)
        .collect();
    let mut cents: Vec<i64> = exact.iter().map(|e| e.floor() as i64).collect();

    // Largest fractional remainder first; sort_by is stable so ties keep order
    let mut order: Vec<usize> = (0..parties.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
    });

    // Summed wide: each floored share fits i64 but their sum may not
    let floored: i128 = cents.iter().map(|c| i128::from(*c)).sum();
    let mut leftover = i128::from(total_cents) - floored;
    while leftover > 0 {
        for &i in &order {
            if leftover == 0 {
                break;
            }
            cents[i] += 1;
            leftover -= 1;
        }
    }
    while leftover < 0 {
        let before = leftover;
        for &i in order.iter().rev() {
            if leftover == 0 {
                break;
            }
            if cents[i] > 0 {
                cents[i] -= 1;
                leftover += 1;
            }
        }
        if leftover == before {
            break;
        }
    }

    parties
        .iter()
        .zip(cents)
        .map(|(p, c)| Split::new(p.id, Money::from_cents(c)))
        .collect()
}

/// Check that an expense can be recorded
pub fn validate_expense(description: &str, amount: Money) -> SplitsyResult<()> {
    if description.trim().is_empty() {
        return Err(SplitsyError::Validation(
            "Expense description cannot be empty".into(),
        ));
    }
    if !amount.is_positive() {
        return Err(SplitsyError::Validation(format!(
            "Expense amount must be positive, got {}",
            amount
        )));
    }
    Ok(())
}

/// Record an expense split according to `allocation`
///
/// On invalid input (blank description, non-positive amount) nothing is
/// recorded and `None` is returned; the ledger is left as it was.
pub fn add_expense<'l>(
    description: &str,
    amount: Money,
    allocation: &PartyAllocation,
    ledger: &'l mut ExpenseLedger,
) -> Option<&'l Expense> {
    if let Err(e) = validate_expense(description, amount) {
        debug!(error = %e, "expense dropped");
        return None;
    }

    let splits = compute_splits(amount, allocation);
    let expense = Expense::new(description.trim(), amount, splits);
    info!(
        expense = %expense.id,
        description = %expense.description,
        amount = %expense.amount,
        parties = expense.splits.len(),
        "expense recorded"
    );
    Some(ledger.append(expense))
}

/// Live split preview for whatever is typed in the amount field
///
/// Unparsable or non-positive input previews as zero for every party.
pub fn preview_splits(amount_input: &str, allocation: &PartyAllocation) -> Vec<Split> {
    let amount = Money::parse(amount_input).unwrap_or_default();
    compute_splits(amount, allocation)
}
