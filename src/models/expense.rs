//! Expense model
//!
//! An expense is a described amount together with a frozen snapshot of how it
//! was divided between the parties at the moment it was recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, PartyId};
use super::money::Money;

/// One party's portion of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// The party this portion belongs to
    pub party: PartyId,

    /// Amount owed by the party for this expense
    pub amount: Money,
}

impl Split {
    /// Create a new split
    pub fn new(party: PartyId, amount: Money) -> Self {
        Self { party, amount }
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-text label, never empty
    pub description: String,

    /// Total amount, always positive
    pub amount: Money,

    /// Per-party portions in allocation order at recording time
    pub splits: Vec<Split>,

    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense from already computed splits
    pub fn new(description: impl Into<String>, amount: Money, splits: Vec<Split>) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            splits,
            recorded_at: Utc::now(),
        }
    }

    /// The portion recorded for a party, if it took part in this expense
    pub fn split_for(&self, party: PartyId) -> Option<Money> {
        self.splits
            .iter()
            .find(|s| s.party == party)
            .map(|s| s.amount)
    }

    /// Sum of all portions (equals `amount` for expenses built by the split calculator)
    pub fn splits_total(&self) -> Money {
        self.splits.iter().map(|s| s.amount).sum()
    }
}
