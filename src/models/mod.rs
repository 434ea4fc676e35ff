//! Core data models for Splitsy
//!
//! This module contains the data structures of the splitting domain: parties
//! and their shares, money amounts, expenses and the ledger.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod party;

pub use expense::{Expense, Split};
pub use ids::{ExpenseId, PartyId};
pub use ledger::ExpenseLedger;
pub use money::{Money, MoneyParseError};
pub use party::{Party, PartyAllocation, MAX_PARTIES, MIN_PARTIES, PERCENT_TOLERANCE};
