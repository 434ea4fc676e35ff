//! Party and allocation models
//!
//! A party is one participant in the split; the allocation is the ordered set
//! of parties together with their percentage shares.

use serde::{Deserialize, Serialize};

use super::ids::PartyId;
use crate::error::{SplitsyError, SplitsyResult};

/// Fewest parties an allocation may hold
pub const MIN_PARTIES: usize = 2;

/// Most parties an allocation may hold (one per letter)
pub const MAX_PARTIES: usize = PartyId::CAPACITY;

/// Tolerance used when checking that shares sum to 100
pub const PERCENT_TOLERANCE: f64 = 1e-9;

/// A participant and their percentage share
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Single-letter label
    pub id: PartyId,

    /// Share of every expense, in percent (0-100)
    pub percentage: f64,
}

impl Party {
    /// Create a new party
    pub fn new(id: PartyId, percentage: f64) -> Self {
        Self { id, percentage }
    }
}

/// The ordered set of parties and their shares
///
/// Insertion order is creation order and display order. The allocation always
/// holds between [`MIN_PARTIES`] and [`MAX_PARTIES`] parties whose shares sum
/// to 100; the mutating operations live in [`crate::services`] and swap in a
/// fully normalized party list in one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyAllocation {
    parties: Vec<Party>,
}

impl PartyAllocation {
    /// Two parties, `A` and `B`, at 50% each
    pub fn new() -> Self {
        Self {
            parties: uniform_parties(MIN_PARTIES),
        }
    }

    /// `count` parties sharing evenly
    pub fn uniform(count: usize) -> SplitsyResult<Self> {
        check_count(count)?;
        Ok(Self {
            parties: uniform_parties(count),
        })
    }

    /// Parties `A`, `B`, ... with the given relative shares, normalized to 100
    pub fn with_shares(shares: &[f64]) -> SplitsyResult<Self> {
        check_count(shares.len())?;
        let mut parties = shares
            .iter()
            .enumerate()
            .map(|(i, share)| Ok(Party::new(PartyId::from_index(i)?, *share)))
            .collect::<SplitsyResult<Vec<_>>>()?;
        crate::services::normalizer::normalize_parties(&mut parties);
        Ok(Self { parties })
    }

    /// All parties in display order
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    /// Number of parties
    pub fn len(&self) -> usize {
        self.parties.len()
    }

    /// Always false; an allocation never drops below two parties
    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// Look up a party by id
    pub fn get(&self, id: PartyId) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    /// Position of a party in display order
    pub fn position(&self, id: PartyId) -> Option<usize> {
        self.parties.iter().position(|p| p.id == id)
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = PartyId> + '_ {
        self.parties.iter().map(|p| p.id)
    }

    /// Sum of all shares (100 within tolerance)
    pub fn total(&self) -> f64 {
        self.parties.iter().map(|p| p.percentage).sum()
    }

    /// Whether the allocation can take another party
    pub fn is_full(&self) -> bool {
        self.parties.len() >= MAX_PARTIES
    }

    /// Whether the allocation is at the two-party minimum
    pub fn at_minimum(&self) -> bool {
        self.parties.len() <= MIN_PARTIES
    }

    /// Check the size and sum invariants
    pub fn validate(&self) -> SplitsyResult<()> {
        check_count(self.parties.len())?;
        let total = self.total();
        if (total - 100.0).abs() > PERCENT_TOLERANCE * 100.0 {
            return Err(SplitsyError::Validation(format!(
                "Shares sum to {} instead of 100",
                total
            )));
        }
        if let Some(bad) = self
            .parties
            .iter()
            .find(|p| !(0.0..=100.0 + PERCENT_TOLERANCE).contains(&p.percentage))
        {
            return Err(SplitsyError::Validation(format!(
                "Party {} has share {} outside 0-100",
                bad.id, bad.percentage
            )));
        }
        Ok(())
    }

    /// Replace the whole party list at once
    pub(crate) fn replace(&mut self, parties: Vec<Party>) {
        debug_assert!((MIN_PARTIES..=MAX_PARTIES).contains(&parties.len()));
        self.parties = parties;
    }
}

impl Default for PartyAllocation {
    fn default() -> Self {
        Self::new()
    }
}

/// `count` parties at `100 / count` each. Callers check `count` first.
pub(crate) fn uniform_parties(count: usize) -> Vec<Party> {
    let share = 100.0 / count as f64;
    let mut parties: Vec<Party> = (0..count)
        .filter_map(|i| PartyId::from_index(i).ok())
        .map(|id| Party::new(id, share))
        .collect();
    crate::services::normalizer::normalize_parties(&mut parties);
    parties
}

fn check_count(count: usize) -> SplitsyResult<()> {
    if count > MAX_PARTIES {
        return Err(SplitsyError::Capacity { max: MAX_PARTIES });
    }
    if count < MIN_PARTIES {
        return Err(SplitsyError::Validation(format!(
            "At least {} parties are needed to split an expense",
            MIN_PARTIES
        )));
    }
    Ok(())
}
