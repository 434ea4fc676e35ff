//! Ledger display formatting
//!
//! Renders the recorded expenses as a table with one column per party.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{ExpenseLedger, Money};

use super::truncate;

/// Longest description shown before truncation
const DESCRIPTION_WIDTH: usize = 32;

/// Format the ledger as a table with a totals row
///
/// Columns are the description, the amount and one column per party that
/// appears in any expense. Parties absent from an expense show `-`.
pub fn format_ledger_table(ledger: &ExpenseLedger, symbol: &str) -> String {
    if ledger.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let parties = ledger.parties();
    let mut builder = Builder::default();

    let mut header = vec!["Expense".to_string(), "Amount".to_string()];
    header.extend(parties.iter().map(|p| p.to_string()));
    builder.push_record(header);

    for expense in ledger.expenses() {
        let mut row = vec![
            truncate(&expense.description, DESCRIPTION_WIDTH),
            expense.amount.format_with_symbol(symbol),
        ];
        row.extend(parties.iter().map(|p| {
            expense
                .split_for(*p)
                .map(|m| m.format_with_symbol(symbol))
                .unwrap_or_else(|| "-".to_string())
        }));
        builder.push_record(row);
    }

    let totals = ledger.totals_by_party();
    let mut total_row = vec!["Total".to_string(), ledger.total().format_with_symbol(symbol)];
    total_row.extend(parties.iter().map(|p| {
        totals
            .iter()
            .find(|(id, _)| id == p)
            .map(|(_, m)| *m)
            .unwrap_or_else(Money::zero)
            .format_with_symbol(symbol)
    }));
    builder.push_record(total_row);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyAllocation;
    use crate::services::{add_expense, add_party};

    #[test]
    fn test_empty_ledger() {
        assert_eq!(
            format_ledger_table(&ExpenseLedger::new(), "$"),
            "No expenses recorded."
        );
    }

    #[test]
    fn test_ledger_table_contents() {
        let mut alloc = PartyAllocation::new();
        let mut ledger = ExpenseLedger::new();
        add_expense("Dinner", Money::from_cents(10_000), &alloc, &mut ledger);
        add_party(&mut alloc).unwrap();
        add_expense("Taxi", Money::from_cents(3_000), &alloc, &mut ledger);

        let table = format_ledger_table(&ledger, "$");
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].contains("Expense"));
        assert!(lines[1].contains(" C "));
        let dinner = lines.iter().find(|l| l.contains("Dinner")).unwrap();
        assert!(dinner.contains("$100.00"));
        assert!(dinner.contains("$50.00"));
        assert!(dinner.contains(" - "));
        let total = lines.iter().find(|l| l.contains("Total")).unwrap();
        assert!(total.contains("$130.00"));
        assert!(total.contains("$60.00"));
        assert!(total.contains("$10.00"));
    }
}
