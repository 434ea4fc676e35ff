//! Splitting session
//!
//! A session owns the allocation and the ledger for as long as the program
//! runs. Both the TUI and the one-shot CLI commands drive the domain through
//! it, so every transition is applied and logged the same way.

use tracing::debug;

use super::membership::{self, RebalanceMode};
use super::split;
use crate::config::settings::Settings;
use crate::error::SplitsyResult;
use crate::models::{Expense, ExpenseLedger, Money, Party, PartyAllocation, PartyId, Split};

/// In-memory state of one splitting session
#[derive(Debug, Clone)]
pub struct Session {
    allocation: PartyAllocation,
    ledger: ExpenseLedger,
    mode: RebalanceMode,
}

impl Session {
    /// Start a session from the user's settings
    pub fn new(settings: &Settings) -> SplitsyResult<Self> {
        Ok(Self {
            allocation: PartyAllocation::uniform(settings.default_parties)?,
            ledger: ExpenseLedger::new(),
            mode: settings.rebalance_mode,
        })
    }

    /// Start a session from an existing allocation
    pub fn with_allocation(allocation: PartyAllocation, mode: RebalanceMode) -> Self {
        Self {
            allocation,
            ledger: ExpenseLedger::new(),
            mode,
        }
    }

    /// Current parties and shares
    pub fn allocation(&self) -> &PartyAllocation {
        &self.allocation
    }

    /// Expenses recorded so far
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    /// How share edits rebalance the other parties
    pub fn mode(&self) -> RebalanceMode {
        self.mode
    }

    /// Switch the rebalance mode for subsequent edits
    pub fn set_mode(&mut self, mode: RebalanceMode) {
        self.mode = mode;
    }

    /// Add the next party; see [`membership::add_party`]
    pub fn add_party(&mut self) -> SplitsyResult<PartyId> {
        membership::add_party(&mut self.allocation)
    }

    /// Remove the last party; see [`membership::remove_party`]
    pub fn remove_party(&mut self) -> Option<Party> {
        membership::remove_party(&mut self.allocation)
    }

    /// Set a party's share; see [`membership::set_percentage`]
    pub fn set_percentage(&mut self, id: PartyId, value: f64) -> SplitsyResult<()> {
        membership::set_percentage(&mut self.allocation, id, value, self.mode)
    }

    /// Move a party's share by `delta` points
    pub fn nudge_percentage(&mut self, id: PartyId, delta: f64) -> SplitsyResult<()> {
        membership::nudge_percentage(&mut self.allocation, id, delta, self.mode)
    }

    /// Give every party an equal share
    pub fn reset_shares(&mut self) {
        membership::reset_shares(&mut self.allocation);
    }

    /// Record an expense from raw form input
    ///
    /// Unparsable amounts are dropped like any other invalid input.
    pub fn add_expense(&mut self, description: &str, amount_input: &str) -> Option<&Expense> {
        match Money::parse(amount_input) {
            Ok(amount) => self.record(description, amount),
            Err(e) => {
                debug!(error = %e, "expense dropped");
                None
            }
        }
    }

    /// Record an expense with an already parsed amount
    pub fn record(&mut self, description: &str, amount: Money) -> Option<&Expense> {
        split::add_expense(description, amount, &self.allocation, &mut self.ledger)
    }

    /// Preview how the amount currently being typed would split
    pub fn preview(&self, amount_input: &str) -> Vec<Split> {
        split::preview_splits(amount_input, &self.allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(c: char) -> PartyId {
        PartyId::try_from(c).unwrap()
    }

    fn session() -> Session {
        Session::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_new_session_uses_settings() {
        let settings = Settings {
            default_parties: 4,
            rebalance_mode: RebalanceMode::Proportional,
            ..Settings::default()
        };
        let session = Session::new(&settings).unwrap();
        assert_eq!(session.allocation().len(), 4);
        assert_eq!(session.mode(), RebalanceMode::Proportional);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_dinner_example() {
        let mut session = session();
        let expense = session.add_expense("Dinner", "100").unwrap();
        assert_eq!(expense.description, "Dinner");
        assert_eq!(expense.amount, Money::from_cents(10_000));
        assert_eq!(
            expense.splits,
            vec![
                Split::new(id('A'), Money::from_cents(5_000)),
                Split::new(id('B'), Money::from_cents(5_000)),
            ]
        );
    }

    #[test]
    fn test_invalid_expenses_are_dropped() {
        let mut session = session();
        assert!(session.add_expense("Dinner", "0").is_none());
        assert!(session.add_expense("Dinner", "-5").is_none());
        assert!(session.add_expense("Dinner", "ten").is_none());
        assert!(session.add_expense("Dinner", "").is_none());
        assert!(session.add_expense("", "100").is_none());
        assert_eq!(session.ledger().len(), 0);
    }

    #[test]
    fn test_recorded_expenses_are_frozen() {
        let mut session = session();
        session.add_expense("Groceries", "60").unwrap();
        session.add_party().unwrap();
        session.set_percentage(id('A'), 80.0).unwrap();
        session.add_expense("Tickets", "30").unwrap();

        let expenses = session.ledger().expenses();
        assert_eq!(expenses[0].splits.len(), 2);
        assert_eq!(expenses[0].split_for(id('A')), Some(Money::from_cents(3_000)));
        assert_eq!(expenses[1].splits.len(), 3);
        assert_eq!(expenses[1].split_for(id('A')), Some(Money::from_cents(2_400)));
        assert_eq!(expenses[1].split_for(id('B')), Some(Money::from_cents(300)));
        assert_eq!(expenses[1].split_for(id('C')), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_membership_round_trip() {
        let mut session = session();
        assert!(session.remove_party().is_none());
        assert_eq!(session.add_party().unwrap(), id('C'));
        assert_eq!(session.remove_party().unwrap().id, id('C'));
        assert_eq!(session.allocation(), &PartyAllocation::new());
    }

    #[test]
    fn test_mode_switch_and_reset() {
        let mut session = session();
        session.set_mode(RebalanceMode::Proportional);
        session.set_percentage(id('A'), 80.0).unwrap();
        assert!(session.allocation().get(id('A')).unwrap().percentage < 80.0);

        session.reset_shares();
        assert_eq!(session.allocation(), &PartyAllocation::new());

        session.nudge_percentage(id('B'), -10.0).unwrap();
        let preview: Vec<i64> = session
            .preview("10")
            .iter()
            .map(|s| s.amount.cents())
            .collect();
        assert_eq!(preview, vec![600, 400]);
    }

    #[test]
    fn test_out_of_range_amounts_are_dropped() {
        let mut session = session();
        assert!(session.add_expense("a", "90000000000000000").is_none());

        let largest = Money::from_cents(Money::MAX_CENTS).format_with_symbol("");
        assert!(session.add_expense("a", &largest).is_some());
        assert!(session.add_expense("b", &largest).is_some());
        assert_eq!(session.ledger().total().cents(), Money::MAX_CENTS * 2);
        let per_party: i64 = session
            .ledger()
            .totals_by_party()
            .iter()
            .map(|(_, m)| m.cents())
            .sum();
        assert_eq!(per_party, Money::MAX_CENTS * 2);
    }
}
