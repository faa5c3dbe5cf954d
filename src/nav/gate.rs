//! Confirmation of destructive actions.

use tracing::{debug, info};

use super::surface::Presenter;
use crate::models::Action;

/// Result of passing an action through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Proceed,
    Cancelled,
}

/// Requires an explicit yes before a destructive action may run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmationGate;

impl ConfirmationGate {
    pub fn new() -> Self {
        Self
    }

    /// Let `action` through, prompting first when it is destructive.
    ///
    /// Non-destructive actions are never prompted.
    pub fn guard<P: Presenter + ?Sized>(&self, action: &Action, presenter: &mut P) -> GateOutcome {
        if !action.destructive {
            return GateOutcome::Proceed;
        }

        let prompt = action.confirm_prompt();
        debug!(action = %action.name, "Awaiting confirmation");

        if presenter.confirm(&prompt) {
            info!(action = %action.name, "Confirmed");
            GateOutcome::Proceed
        } else {
            info!(action = %action.name, "Cancelled by user");
            GateOutcome::Cancelled
        }
    }
}
