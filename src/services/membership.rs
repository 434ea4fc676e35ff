//! Party membership manager
//!
//! Adds and removes parties and edits individual shares. Every operation
//! builds the complete new party list first and swaps it into the allocation
//! in one step, finishing with a normalization pass, so an allocation is never
//! observed half-updated.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::normalizer::normalize_parties;
use crate::error::{SplitsyError, SplitsyResult};
use crate::models::party::uniform_parties;
use crate::models::{Party, PartyAllocation, PartyId, MAX_PARTIES};

/// How the other shares react when one share is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RebalanceMode {
    /// The edited party keeps exactly the requested share; the others divide
    /// the rest in proportion to their previous shares
    #[default]
    Pinned,
    /// The requested share is applied and then every share, including the
    /// edited one, is rescaled to sum to 100
    Proportional,
}

impl RebalanceMode {
    /// Parse a mode name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pinned" | "pin" => Some(Self::Pinned),
            "proportional" | "prop" | "scale" => Some(Self::Proportional),
            _ => None,
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Pinned => Self::Proportional,
            Self::Proportional => Self::Pinned,
        }
    }
}

impl std::fmt::Display for RebalanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RebalanceMode::Pinned => write!(f, "pinned"),
            RebalanceMode::Proportional => write!(f, "proportional"),
        }
    }
}

/// Append the next lettered party and reset every share to `100 / (n + 1)`
///
/// Fails with [`SplitsyError::Capacity`] once all 26 letters are in use; the
/// allocation is left unchanged in that case.
pub fn add_party(allocation: &mut PartyAllocation) -> SplitsyResult<PartyId> {
    let count = allocation.len();
    if count >= MAX_PARTIES {
        debug!(parties = count, "add party refused, allocation full");
        return Err(SplitsyError::Capacity { max: MAX_PARTIES });
    }

    let new_id = PartyId::from_index(count)?;
    let share = 100.0 / (count + 1) as f64;
    let mut parties: Vec<Party> = allocation
        .ids()
        .map(|id| Party::new(id, share))
        .collect();
    parties.push(Party::new(new_id, share));
    normalize_parties(&mut parties);
    allocation.replace(parties);

    info!(party = %new_id, parties = count + 1, "party added");
    Ok(new_id)
}

/// Remove the most recently added party and reset the rest to `100 / (n - 1)`
///
/// At the two-party minimum nothing happens and `None` is returned.
pub fn remove_party(allocation: &mut PartyAllocation) -> Option<Party> {
    if allocation.at_minimum() {
        debug!(parties = allocation.len(), "remove party refused, at minimum");
        return None;
    }

    let mut parties = allocation.parties().to_vec();
    let removed = parties.pop()?;
    let share = 100.0 / parties.len() as f64;
    for party in parties.iter_mut() {
        party.percentage = share;
    }
    normalize_parties(&mut parties);
    allocation.replace(parties);

    info!(party = %removed.id, parties = allocation.len(), "party removed");
    Some(removed)
}

/// Set one party's share and rebalance the rest according to `mode`
///
/// `value` is clamped to 0-100. Fails with [`SplitsyError::NotFound`] for an
/// unknown party and [`SplitsyError::Validation`] for a non-finite value;
/// either way the allocation is left unchanged.
pub fn set_percentage(
    allocation: &mut PartyAllocation,
    id: PartyId,
    value: f64,
    mode: RebalanceMode,
) -> SplitsyResult<()> {
    let index = allocation
        .position(id)
        .ok_or_else(|| SplitsyError::party_not_found(id.to_string()))?;
    if !value.is_finite() {
        return Err(SplitsyError::Validation(format!(
            "Share for party {} must be a number, got {}",
            id, value
        )));
    }
    let value = value.clamp(0.0, 100.0);

    let mut parties = allocation.parties().to_vec();
    match mode {
        RebalanceMode::Pinned => {
            let others_total: f64 = parties
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, p)| p.percentage)
                .sum();
            let remainder = 100.0 - value;
            let others = (parties.len() - 1) as f64;
            for (i, party) in parties.iter_mut().enumerate() {
                party.percentage = if i == index {
                    value
                } else if others_total > 0.0 {
                    party.percentage * remainder / others_total
                } else {
                    remainder / others
                };
            }
        }
        RebalanceMode::Proportional => {
            parties[index].percentage = value;
        }
    }
    normalize_parties(&mut parties);
    allocation.replace(parties);

    debug!(party = %id, requested = value, %mode, "share updated");
    Ok(())
}

/// Move one party's share by `delta` percentage points
pub fn nudge_percentage(
    allocation: &mut PartyAllocation,
    id: PartyId,
    delta: f64,
    mode: RebalanceMode,
) -> SplitsyResult<()> {
    let current = allocation
        .get(id)
        .map(|p| p.percentage)
        .ok_or_else(|| SplitsyError::party_not_found(id.to_string()))?;
    set_percentage(allocation, id, current + delta, mode)
}

/// Give every party the same share again
pub fn reset_shares(allocation: &mut PartyAllocation) {
    let parties = uniform_parties(allocation.len());
    allocation.replace(parties);
    debug!(parties = allocation.len(), "shares reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PERCENT_TOLERANCE;

    fn id(c: char) -> PartyId {
        PartyId::try_from(c).unwrap()
    }

    fn shares(alloc: &PartyAllocation) -> Vec<f64> {
        alloc.parties().iter().map(|p| p.percentage).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn assert_valid(alloc: &PartyAllocation) {
        assert!((alloc.total() - 100.0).abs() < PERCENT_TOLERANCE);
        assert!(alloc.validate().is_ok());
    }

    #[test]
    fn test_rebalance_mode_parse() {
        assert_eq!(RebalanceMode::parse("Pinned"), Some(RebalanceMode::Pinned));
        assert_eq!(RebalanceMode::parse(" prop "), Some(RebalanceMode::Proportional));
        assert_eq!(RebalanceMode::parse("sideways"), None);
        assert_eq!(RebalanceMode::Pinned.toggled(), RebalanceMode::Proportional);
        assert_eq!(RebalanceMode::Proportional.to_string(), "proportional");
    }

    #[test]
    fn test_add_party_redistributes_evenly() {
        let mut alloc = PartyAllocation::new();
        let new_id = add_party(&mut alloc).unwrap();

        assert_eq!(new_id, id('C'));
        assert_eq!(alloc.len(), 3);
        let s = shares(&alloc);
        assert_eq!(s[0], s[1]);
        assert_eq!(s[1], s[2]);
        assert_close(s[0], 100.0 / 3.0);
        assert_valid(&alloc);
    }

    #[test]
    fn test_add_party_discards_uneven_shares() {
        let mut alloc = PartyAllocation::with_shares(&[90.0, 10.0]).unwrap();
        add_party(&mut alloc).unwrap();
        add_party(&mut alloc).unwrap();
        assert_eq!(shares(&alloc), vec![25.0; 4]);
    }

    #[test]
    fn test_add_party_capacity() {
        let mut alloc = PartyAllocation::new();
        for _ in 2..26 {
            add_party(&mut alloc).unwrap();
        }
        assert_eq!(alloc.len(), 26);
        assert_eq!(alloc.parties()[25].id, id('Z'));

        let before = alloc.clone();
        assert!(add_party(&mut alloc).unwrap_err().is_capacity());
        assert_eq!(alloc, before);
    }

    #[test]
    fn test_remove_party_at_minimum_is_noop() {
        let mut alloc = PartyAllocation::with_shares(&[70.0, 30.0]).unwrap();
        assert!(remove_party(&mut alloc).is_none());
        assert_eq!(alloc.len(), 2);
        assert_eq!(shares(&alloc), vec![70.0, 30.0]);
    }

    #[test]
    fn test_remove_party_drops_last_and_resets() {
        let mut alloc = PartyAllocation::with_shares(&[50.0, 30.0, 20.0]).unwrap();
        let removed = remove_party(&mut alloc).unwrap();
        assert_eq!(removed.id, id('C'));
        assert_eq!(shares(&alloc), vec![50.0, 50.0]);
    }

    #[test]
    fn test_add_then_remove_restores_uniform_count() {
        let mut alloc = PartyAllocation::uniform(3).unwrap();
        add_party(&mut alloc).unwrap();
        remove_party(&mut alloc).unwrap();
        assert_eq!(alloc, PartyAllocation::uniform(3).unwrap());
        assert_eq!(add_party(&mut alloc).unwrap(), id('D'));
    }

    #[test]
    fn test_set_percentage_pinned() {
        let mut alloc = PartyAllocation::new();
        set_percentage(&mut alloc, id('A'), 80.0, RebalanceMode::Pinned).unwrap();
        let s = shares(&alloc);
        assert_close(s[0], 80.0);
        assert_close(s[1], 20.0);
        assert_valid(&alloc);
    }

    #[test]
    fn test_set_percentage_pinned_keeps_other_proportions() {
        let mut alloc = PartyAllocation::with_shares(&[40.0, 40.0, 20.0]).unwrap();
        set_percentage(&mut alloc, id('A'), 70.0, RebalanceMode::Pinned).unwrap();
        let s = shares(&alloc);
        assert_close(s[0], 70.0);
        assert_close(s[1], 20.0);
        assert_close(s[2], 10.0);
    }

    #[test]
    fn test_set_percentage_pinned_from_zero_others() {
        let mut alloc = PartyAllocation::new();
        set_percentage(&mut alloc, id('A'), 100.0, RebalanceMode::Pinned).unwrap();
        add_party(&mut alloc).unwrap();
        set_percentage(&mut alloc, id('A'), 100.0, RebalanceMode::Pinned).unwrap();
        set_percentage(&mut alloc, id('A'), 40.0, RebalanceMode::Pinned).unwrap();
        let s = shares(&alloc);
        assert_close(s[0], 40.0);
        assert_close(s[1], 30.0);
        assert_close(s[2], 30.0);
    }

    #[test]
    fn test_set_percentage_proportional() {
        let mut alloc = PartyAllocation::new();
        set_percentage(&mut alloc, id('A'), 80.0, RebalanceMode::Proportional).unwrap();
        let s = shares(&alloc);
        assert_close(s[0], 80.0 / 130.0 * 100.0);
        assert_close(s[1], 50.0 / 130.0 * 100.0);
        assert_valid(&alloc);
    }

    #[test]
    fn test_set_percentage_proportional_all_zero() {
        let mut alloc = PartyAllocation::with_shares(&[100.0, 0.0]).unwrap();
        set_percentage(&mut alloc, id('A'), 0.0, RebalanceMode::Proportional).unwrap();
        assert_eq!(shares(&alloc), vec![50.0, 50.0]);
    }

    #[test]
    fn test_set_percentage_clamps() {
        let mut alloc = PartyAllocation::new();
        set_percentage(&mut alloc, id('B'), 150.0, RebalanceMode::Pinned).unwrap();
        assert_eq!(shares(&alloc), vec![0.0, 100.0]);
        set_percentage(&mut alloc, id('B'), -5.0, RebalanceMode::Pinned).unwrap();
        assert_eq!(shares(&alloc), vec![100.0, 0.0]);
    }

    #[test]
    fn test_set_percentage_unknown_party() {
        let mut alloc = PartyAllocation::new();
        let err = set_percentage(&mut alloc, id('Q'), 10.0, RebalanceMode::Pinned).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(alloc, PartyAllocation::new());
    }

    #[test]
    fn test_set_percentage_rejects_nan() {
        let mut alloc = PartyAllocation::new();
        let err = set_percentage(&mut alloc, id('A'), f64::NAN, RebalanceMode::Pinned).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(alloc, PartyAllocation::new());
    }

    #[test]
    fn test_nudge_percentage() {
        let mut alloc = PartyAllocation::new();
        nudge_percentage(&mut alloc, id('A'), 0.1, RebalanceMode::Pinned).unwrap();
        let s = shares(&alloc);
        assert_close(s[0], 50.1);
        assert_close(s[1], 49.9);
        assert!(nudge_percentage(&mut alloc, id('Z'), 1.0, RebalanceMode::Pinned)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_reset_shares() {
        let mut alloc = PartyAllocation::with_shares(&[10.0, 20.0, 70.0]).unwrap();
        reset_shares(&mut alloc);
        assert_eq!(alloc, PartyAllocation::uniform(3).unwrap());
    }

    #[test]
    fn test_any_operation_sequence_keeps_invariants() {
        let mut alloc = PartyAllocation::new();
        let modes = [RebalanceMode::Pinned, RebalanceMode::Proportional];
        for step in 0..200usize {
            let mode = modes[step % 2];
            match step % 7 {
                0 | 3 => {
                    let _ = add_party(&mut alloc);
                }
                5 => {
                    remove_party(&mut alloc);
                }
                _ => {
                    let target = alloc.parties()[step % alloc.len()].id;
                    let value = ((step * 37) % 1001) as f64 / 10.0;
                    set_percentage(&mut alloc, target, value, mode).unwrap();
                }
            }
            assert_valid(&alloc);
            let ids: Vec<usize> = alloc.ids().map(|i| i.index()).collect();
            assert_eq!(ids, (0..alloc.len()).collect::<Vec<_>>());
        }
    }
}
