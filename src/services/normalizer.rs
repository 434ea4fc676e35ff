//! Allocation normalizer
//!
//! Rescales shares so they sum to exactly 100 while keeping their relative
//! proportions. Every operation that touches percentages ends with this pass.

use crate::models::{Party, PartyAllocation};

/// Return a copy of `allocation` with its shares rescaled to sum to 100
///
/// Order and relative proportions are preserved. When every share is zero
/// there are no proportions to keep, so each party gets `100 / n`.
pub fn normalize(allocation: &PartyAllocation) -> PartyAllocation {
    let mut parties = allocation.parties().to_vec();
    normalize_parties(&mut parties);
    let mut normalized = allocation.clone();
    normalized.replace(parties);
    normalized
}

/// Normalize raw shares in place
///
/// Negative or non-finite shares count as zero.
pub fn normalize_shares(shares: &mut [f64]) {
    if shares.is_empty() {
        return;
    }

    for share in shares.iter_mut() {
        if !share.is_finite() || *share < 0.0 {
            *share = 0.0;
        }
    }

    let total: f64 = shares.iter().sum();
    if total > 0.0 && total.is_finite() {
        let scale = 100.0 / total;
        for share in shares.iter_mut() {
            *share *= scale;
        }
    } else {
        let even = 100.0 / shares.len() as f64;
        shares.fill(even);
    }
}

pub(crate) fn normalize_parties(parties: &mut [Party]) {
    let mut shares: Vec<f64> = parties.iter().map(|p| p.percentage).collect();
    normalize_shares(&mut shares);
    for (party, share) in parties.iter_mut().zip(shares) {
        party.percentage = share;
    }
}
