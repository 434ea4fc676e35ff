//! Strongly-typed identifiers for parties and expenses
//!
//! Parties are labelled with a single letter; expenses carry a random UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SplitsyError;

/// Single-letter identifier of a party (`A` through `Z`)
///
/// The letter doubles as display label and lookup key. Ids are handed out
/// sequentially, so the n-th party created is always `PartyId::from_index(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct PartyId(char);

impl PartyId {
    /// Number of distinct party ids available
    pub const CAPACITY: usize = 26;

    /// The id for the party at `index` (0 = `A`)
    pub fn from_index(index: usize) -> Result<Self, SplitsyError> {
        if index >= Self::CAPACITY {
            return Err(SplitsyError::Capacity {
                max: Self::CAPACITY,
            });
        }
        // index < 26, so the cast and addition stay within ASCII letters
        Ok(Self(char::from(b'A' + index as u8)))
    }

    /// Position of this id in the alphabet (0 = `A`)
    pub fn index(&self) -> usize {
        (self.0 as u8 - b'A') as usize
    }

    /// The letter itself
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for PartyId {
    type Error = SplitsyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            Err(SplitsyError::Validation(format!(
                "Party id must be a letter A-Z, got {:?}",
                c
            )))
        }
    }
}

impl From<PartyId> for char {
    fn from(id: PartyId) -> Self {
        id.0
    }
}

impl FromStr for PartyId {
    type Err = SplitsyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(SplitsyError::Validation(format!(
                "Party id must be a single letter, got {:?}",
                s
            ))),
        }
    }
}

/// Identifier of a recorded expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_id_sequence() {
        assert_eq!(PartyId::from_index(0).unwrap().as_char(), 'A');
        assert_eq!(PartyId::from_index(1).unwrap().as_char(), 'B');
        assert_eq!(PartyId::from_index(25).unwrap().as_char(), 'Z');
        assert_eq!(PartyId::from_index(25).unwrap().index(), 25);
    }

    #[test]
    fn test_party_id_past_alphabet() {
        let err = PartyId::from_index(26).unwrap_err();
        assert!(err.is_capacity());
    }

    #[test]
    fn test_party_id_parse() {
        assert_eq!("c".parse::<PartyId>().unwrap().as_char(), 'C');
        assert_eq!(" D ".parse::<PartyId>().unwrap().to_string(), "D");
        assert!("".parse::<PartyId>().is_err());
        assert!("AB".parse::<PartyId>().is_err());
        assert!("7".parse::<PartyId>().is_err());
    }

    #[test]
    fn test_party_id_serialization() {
        let id = PartyId::from_index(2).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"C\"");
        let back: PartyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PartyId>("\"%\"").is_err());
    }

    #[test]
    fn test_expense_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
        assert_ne!(id, ExpenseId::new());
    }
}
