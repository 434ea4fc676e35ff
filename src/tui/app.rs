//! Application state for the TUI
//!
//! The App struct holds the splitting session plus everything needed for
//! rendering and handling events: form inputs, focus and status line.

use crate::config::settings::Settings;
use crate::error::SplitsyError;
use crate::models::{Money, MoneyParseError, PartyId};
use crate::services::{validate_expense, Session};

use super::widgets::TextInput;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Expense description field
    #[default]
    Description,
    /// Expense amount field
    Amount,
    /// Party list and share sliders
    Parties,
}

impl Focus {
    /// Next focus target (Tab)
    pub fn next(self) -> Self {
        match self {
            Focus::Description => Focus::Amount,
            Focus::Amount => Focus::Parties,
            Focus::Parties => Focus::Description,
        }
    }

    /// Previous focus target (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Focus::Description => Focus::Parties,
            Focus::Amount => Focus::Description,
            Focus::Parties => Focus::Amount,
        }
    }

    /// Whether a text field has focus
    pub fn is_text(self) -> bool {
        matches!(self, Focus::Description | Focus::Amount)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The splitting session
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which area has focus
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Expense description input
    pub description: TextInput,

    /// Expense amount input
    pub amount: TextInput,

    /// Index of the selected party
    pub selected_party: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, session: Session) -> Self {
        Self {
            settings,
            session,
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            description: TextInput::new()
                .label("Expense")
                .placeholder("Enter expense description")
                .focused(true),
            amount: TextInput::new()
                .label(" Amount")
                .placeholder("0")
                .numeric(true),
            selected_party: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move focus to a new area
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.description.focused = focus == Focus::Description;
        self.amount.focused = focus == Focus::Amount;
    }

    /// The text input with focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Description => Some(&mut self.description),
            Focus::Amount => Some(&mut self.amount),
            Focus::Parties => None,
        }
    }

    /// Id of the selected party
    pub fn selected_party_id(&self) -> Option<PartyId> {
        self.session
            .allocation()
            .parties()
            .get(self.selected_party)
            .map(|p| p.id)
    }

    /// Select the previous party
    pub fn select_prev_party(&mut self) {
        self.selected_party = self.selected_party.saturating_sub(1);
    }

    /// Select the next party
    pub fn select_next_party(&mut self) {
        let last = self.session.allocation().len().saturating_sub(1);
        self.selected_party = (self.selected_party + 1).min(last);
    }

    /// Add a party and select it
    pub fn add_party(&mut self) {
        match self.session.add_party() {
            Ok(id) => {
                self.selected_party = self.session.allocation().len() - 1;
                self.set_status(format!("Added party {}", id));
            }
            Err(SplitsyError::Capacity { max }) => {
                self.set_status(format!("At most {} parties", max));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Remove the last party
    pub fn remove_party(&mut self) {
        match self.session.remove_party() {
            Some(party) => {
                let last = self.session.allocation().len() - 1;
                self.selected_party = self.selected_party.min(last);
                self.set_status(format!("Removed party {}", party.id));
            }
            None => self.set_status("At least two parties are needed"),
        }
    }

    /// Move the selected party's share by `steps` slider steps
    pub fn nudge_selected(&mut self, steps: f64) {
        if let Some(id) = self.selected_party_id() {
            let delta = steps * self.settings.percentage_step;
            // The id comes from the allocation itself, so lookup cannot fail
            if self.session.nudge_percentage(id, delta).is_ok() {
                self.clear_status();
            }
        }
    }

    /// Set the selected party's share to an exact value
    pub fn set_selected(&mut self, value: f64) {
        if let Some(id) = self.selected_party_id() {
            if self.session.set_percentage(id, value).is_ok() {
                self.clear_status();
            }
        }
    }

    /// Reset every share to an even split
    pub fn reset_shares(&mut self) {
        self.session.reset_shares();
        self.set_status("Shares reset evenly");
    }

    /// Switch between pinned and proportional rebalancing
    pub fn toggle_mode(&mut self) {
        let mode = self.session.mode().toggled();
        self.session.set_mode(mode);
        self.set_status(format!("Rebalance mode: {}", mode));
    }

    /// Record the expense currently in the form
    ///
    /// On success both fields are cleared and focus returns to the
    /// description. Invalid input leaves everything as typed.
    pub fn submit_expense(&mut self) {
        let description = self.description.value().to_string();
        let amount_input = self.amount.value().to_string();

        let recorded = self
            .session
            .add_expense(&description, &amount_input)
            .map(|e| (e.description.clone(), e.amount));

        match recorded {
            Some((description, amount)) => {
                self.description.clear();
                self.amount.clear();
                self.set_focus(Focus::Description);
                self.set_status(format!(
                    "Recorded {} ({})",
                    description,
                    amount.format_with_symbol(&self.settings.currency_symbol)
                ));
            }
            None => {
                let hint = match Money::parse(&amount_input) {
                    Err(MoneyParseError::Overflow(_)) => format!(
                        "Amount too large, at most {}",
                        Money::from_cents(Money::MAX_CENTS)
                            .format_with_symbol(&self.settings.currency_symbol)
                    ),
                    Err(_) => "Enter a numeric amount".to_string(),
                    Ok(amount) if amount.is_zero() && has_nonzero_digit(&amount_input) => {
                        format!(
                            "Amount rounds to {}",
                            amount.format_with_symbol(&self.settings.currency_symbol)
                        )
                    }
                    Ok(amount) => match validate_expense(&description, amount) {
                        Err(SplitsyError::Validation(msg)) => msg,
                        _ => "Expense not recorded".to_string(),
                    },
                };
                self.set_status(hint);
            }
        }
    }
}

/// Whether the input names some non-zero quantity, even one below a cent
fn has_nonzero_digit(input: &str) -> bool {
    input.chars().any(|c| matches!(c, '1'..='9'))
}
