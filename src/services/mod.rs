//! Service layer for Splitsy
//!
//! The service layer holds the splitting logic on top of the models:
//! normalization, split calculation, membership changes and the session that
//! ties them together.

pub mod membership;
pub mod normalizer;
pub mod session;
pub mod split;

pub use membership::{
    add_party, nudge_percentage, remove_party, reset_shares, set_percentage, RebalanceMode,
};
pub use normalizer::{normalize, normalize_shares};
pub use session::Session;
pub use split::{add_expense, compute_splits, preview_splits, validate_expense};
