//! Splitsy - split shared expenses between parties by percentage
//!
//! This library provides the core of the Splitsy expense splitter. A session
//! holds a percentage allocation over lettered parties (A, B, C, ...) that
//! always sums to 100%, and a ledger of expenses whose per-party splits are
//! computed from the allocation at the moment each expense is recorded.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (parties, allocations, money, expenses)
//! - `services`: Normalization, splitting and membership operations
//! - `cli`: One-shot command handlers
//! - `display`: Plain-text formatting for the CLI
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use splitsy::models::Money;
//! use splitsy::services::{RebalanceMode, Session};
//! use splitsy::models::PartyAllocation;
//!
//! let mut session = Session::with_allocation(PartyAllocation::new(), RebalanceMode::Pinned);
//! let expense = session.add_expense("Dinner", "100").unwrap();
//! assert_eq!(expense.splits[0].amount, Money::from_cents(5000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::SplitsyError;
