//! Expense ledger
//!
//! Append-only, chronological list of recorded expenses. The only way in is
//! [`crate::services::split::add_expense`]; nothing is ever edited or removed.

use serde::Serialize;

use super::expense::Expense;
use super::ids::PartyId;
use super::money::Money;

/// Chronological record of every expense entered in a session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All expenses, oldest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Most recently recorded expense
    pub fn last(&self) -> Option<&Expense> {
        self.expenses.last()
    }

    /// Sum of every expense amount
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Each party's total across all expenses, in first-seen order
    ///
    /// Parties removed from the allocation keep their historical totals.
    pub fn totals_by_party(&self) -> Vec<(PartyId, Money)> {
        let mut totals: Vec<(PartyId, Money)> = Vec::new();
        for split in self.expenses.iter().flat_map(|e| e.splits.iter()) {
            match totals.iter_mut().find(|(id, _)| *id == split.party) {
                Some((_, sum)) => *sum += split.amount,
                None => totals.push((split.party, split.amount)),
            }
        }
        totals
    }

    /// Every party that appears in any expense, in first-seen order
    pub fn parties(&self) -> Vec<PartyId> {
        self.totals_by_party().into_iter().map(|(id, _)| id).collect()
    }

    pub(crate) fn append(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        // just pushed, so the ledger is not empty
        &self.expenses[self.expenses.len() - 1]
    }
}
