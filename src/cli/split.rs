//! Split and ledger CLI commands
//!
//! One-shot commands that build a session from the command line, apply the
//! requested shares and print the result.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_allocation, format_ledger_table, format_share_bar, format_splits};
use crate::error::{SplitsyError, SplitsyResult};
use crate::models::{Money, PartyAllocation, PartyId};
use crate::services::{RebalanceMode, Session};

/// Width of the share bar printed above a split
const BAR_WIDTH: usize = 40;

/// Options describing the parties and their shares
#[derive(Args, Debug, Clone, Default)]
pub struct AllocationArgs {
    /// Number of parties (2-26), split evenly before any --share is applied
    #[arg(short, long)]
    pub parties: Option<usize>,

    /// Set a party's share, e.g. "A=60" (repeatable, applied in order)
    #[arg(short, long = "share", value_name = "ID=PCT")]
    pub shares: Vec<String>,

    /// How the other shares react to each --share (pinned, proportional)
    #[arg(short, long)]
    pub mode: Option<String>,
}

/// Arguments of `splitsy split`
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Amount to split (e.g. "100" or "24.50")
    pub amount: String,

    #[command(flatten)]
    pub allocation: AllocationArgs,
}

/// Arguments of `splitsy ledger`
#[derive(Args, Debug, Clone)]
pub struct LedgerArgs {
    /// Expense to record, e.g. "Dinner=100" (repeatable, recorded in order)
    #[arg(short, long = "expense", value_name = "DESCRIPTION=AMOUNT", required = true)]
    pub expenses: Vec<String>,

    #[command(flatten)]
    pub allocation: AllocationArgs,
}

/// Handle `splitsy split`
pub fn handle_split_command(settings: &Settings, args: SplitArgs) -> SplitsyResult<()> {
    print!("{}", run_split(settings, &args)?);
    Ok(())
}

/// Handle `splitsy ledger`
pub fn handle_ledger_command(settings: &Settings, args: LedgerArgs) -> SplitsyResult<()> {
    let (output, skipped) = run_ledger(settings, &args)?;
    for entry in skipped {
        eprintln!("Skipped invalid expense: {}", entry);
    }
    print!("{}", output);
    Ok(())
}

/// Render the split of one amount
pub fn run_split(settings: &Settings, args: &SplitArgs) -> SplitsyResult<String> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| SplitsyError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(SplitsyError::Validation(format!(
            "Amount to split must be positive, got {}",
            amount
        )));
    }

    let session = build_session(settings, &args.allocation)?;
    let splits = session.preview(&args.amount);

    let mut output = String::new();
    output.push_str(&format!(
        "[{}]\n\n",
        format_share_bar(session.allocation(), BAR_WIDTH)
    ));
    output.push_str(&format_splits(
        amount,
        &splits,
        session.allocation(),
        &settings.currency_symbol,
    ));
    Ok(output)
}

/// Record every expense and render the ledger
///
/// Returns the table and the raw entries that were dropped as invalid.
pub fn run_ledger(settings: &Settings, args: &LedgerArgs) -> SplitsyResult<(String, Vec<String>)> {
    let mut session = build_session(settings, &args.allocation)?;
    let mut skipped = Vec::new();

    for entry in &args.expenses {
        let recorded = match entry.rsplit_once('=') {
            Some((description, amount)) => session.add_expense(description, amount).is_some(),
            None => false,
        };
        if !recorded {
            skipped.push(entry.clone());
        }
    }

    let mut output = format!("Shares:\n{}\n", format_allocation(session.allocation()));
    output.push_str(&format_ledger_table(session.ledger(), &settings.currency_symbol));
    output.push('\n');
    Ok((output, skipped))
}

/// Build a session from settings and command-line allocation options
pub fn build_session(settings: &Settings, args: &AllocationArgs) -> SplitsyResult<Session> {
    let mode = match &args.mode {
        Some(name) => RebalanceMode::parse(name).ok_or_else(|| {
            SplitsyError::Validation(format!(
                "Invalid rebalance mode: '{}'. Valid modes: pinned, proportional",
                name
            ))
        })?,
        None => settings.rebalance_mode,
    };
    let count = args.parties.unwrap_or(settings.default_parties);
    let mut session = Session::with_allocation(PartyAllocation::uniform(count)?, mode);

    for share in &args.shares {
        let (id, value) = parse_share(share)?;
        session.set_percentage(id, value)?;
    }
    Ok(session)
}

/// Parse an `ID=PCT` share option
fn parse_share(s: &str) -> SplitsyResult<(PartyId, f64)> {
    let (id, value) = s.split_once('=').ok_or_else(|| {
        SplitsyError::Validation(format!("Invalid share '{}': expected ID=PCT, e.g. A=60", s))
    })?;
    let id: PartyId = id.parse()?;
    let value: f64 = value
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| SplitsyError::Validation(format!("Invalid percentage in '{}'", s)))?;
    Ok((id, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alloc_args(parties: Option<usize>, shares: &[&str]) -> AllocationArgs {
        AllocationArgs {
            parties,
            shares: shares.iter().map(|s| s.to_string()).collect(),
            mode: None,
        }
    }

    #[test]
    fn test_parse_share() {
        let (id, value) = parse_share("b=12.5%").unwrap();
        assert_eq!(id.as_char(), 'B');
        assert_eq!(value, 12.5);
        assert!(parse_share("A").is_err());
        assert!(parse_share("A=lots").is_err());
        assert!(parse_share("AB=10").is_err());
    }

    #[test]
    fn test_build_session_applies_shares() {
        let session = build_session(&Settings::default(), &alloc_args(Some(3), &["A=50"])).unwrap();
        let shares: Vec<f64> = session
            .allocation()
            .parties()
            .iter()
            .map(|p| p.percentage)
            .collect();
        assert!((shares[0] - 50.0).abs() < 1e-9);
        assert!((shares[1] - 25.0).abs() < 1e-9);
        assert!((shares[2] - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_session_errors() {
        let settings = Settings::default();
        assert!(build_session(&settings, &alloc_args(Some(27), &[]))
            .unwrap_err()
            .is_capacity());
        assert!(build_session(&settings, &alloc_args(None, &["D=10"]))
            .unwrap_err()
            .is_not_found());

        let args = AllocationArgs {
            mode: Some("sideways".into()),
            ..AllocationArgs::default()
        };
        assert!(build_session(&settings, &args).unwrap_err().is_validation());
    }

    #[test]
    fn test_run_split() {
        let args = SplitArgs {
            amount: "100".into(),
            allocation: alloc_args(None, &["A=80"]),
        };
        let output = run_split(&Settings::default(), &args).unwrap();
        assert!(output.contains("$80.00"));
        assert!(output.contains("$20.00"));
        assert!(output.contains("$100.00"));

        let args = SplitArgs {
            amount: "-5".into(),
            allocation: AllocationArgs::default(),
        };
        assert!(run_split(&Settings::default(), &args).is_err());
    }

    #[test]
    fn test_run_ledger_skips_invalid() {
        let args = LedgerArgs {
            expenses: vec![
                "Dinner=100".into(),
                "Nothing=0".into(),
                "no amount".into(),
                "=12".into(),
                "Taxi=24.50".into(),
            ],
            allocation: AllocationArgs::default(),
        };
        let (output, skipped) = run_ledger(&Settings::default(), &args).unwrap();
        assert_eq!(skipped, vec!["Nothing=0", "no amount", "=12"]);
        assert!(output.contains("Dinner"));
        assert!(output.contains("$12.25"));
        assert!(output.contains("$124.50"));
    }
}
