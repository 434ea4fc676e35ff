//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod split;

pub use split::{
    build_session, handle_ledger_command, handle_split_command, AllocationArgs, LedgerArgs,
    SplitArgs,
};
