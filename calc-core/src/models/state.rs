//! The calculator's single mutable state value.
//!
//! Operands are kept as text rather than numbers so that what the user typed
//! (a trailing decimal point, for example) survives across renders. They are
//! parsed only when an operation needs their value.

use serde::{Deserialize, Serialize};

use crate::Operator;

/// Initial and reset value of the operand being entered.
pub(crate) const ZERO: &str = "0";

/// A left operand captured together with the operator waiting for its right
/// operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: Operator,
}

/// Running state of a left-to-right four-function calculation.
///
/// The operator and the previous operand only exist together, so an operator
/// can never be pending without a captured left operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_input: String,
    pub(crate) should_reset_display: bool,
    pub(crate) pending: Option<PendingOperation>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            current_input: ZERO.to_string(),
            should_reset_display: false,
            pending: None,
        }
    }

    /// The operand currently being entered or most recently computed.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The captured left operand, or an empty string when none is pending.
    pub fn previous_input(&self) -> &str {
        self.pending
            .as_ref()
            .map(|p| p.operand.as_str())
            .unwrap_or("")
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// True when the next digit starts a fresh operand.
    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// An operator was just selected and no right operand has been typed yet.
    pub fn awaiting_operand(&self) -> bool {
        self.should_reset_display && self.current_input == ZERO
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_state_is_zero_with_nothing_pending() {
        let state = CalculatorState::new();

        assert_eq!(state.current_input(), "0");
        assert_eq!(state.previous_input(), "");
        assert_eq!(state.operator(), None);
        assert!(!state.should_reset_display());
    }

    #[test]
    fn previous_input_reads_pending_operand() {
        let state = CalculatorState {
            current_input: ZERO.to_string(),
            should_reset_display: true,
            pending: Some(PendingOperation {
                operand: "12.5".to_string(),
                operator: Operator::Divide,
            }),
        };

        assert_eq!(state.previous_input(), "12.5");
        assert_eq!(state.operator(), Some(Operator::Divide));
        assert!(state.awaiting_operand());
    }
}
