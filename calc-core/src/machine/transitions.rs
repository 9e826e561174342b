use crate::calculations::common::{parse_operand, result_text};
use crate::calculations::{CalcError, evaluate};
use crate::models::ZERO;
use crate::{CalculatorState, Digit, Operator, PendingOperation};

impl CalculatorState {
    /// Appends a digit or decimal point to the operand being entered.
    ///
    /// Starts a fresh operand right after an operator or equals. A second
    /// decimal point is ignored, and a leading `"0"` is replaced by any digit.
    pub fn enter_digit(
        &mut self,
        digit: Digit,
    ) {
        if self.should_reset_display {
            self.current_input = ZERO.to_string();
            self.should_reset_display = false;
        }

        if digit.is_point() && self.current_input.contains('.') {
            return;
        }

        if self.current_input == ZERO && !digit.is_point() {
            self.current_input = digit.as_char().to_string();
        } else {
            self.current_input.push(digit.as_char());
        }
    }

    /// Selects `operator` as the pending operation.
    ///
    /// With nothing pending, the current operand becomes the left operand.
    /// With an operation already pending, it is resolved first and its result
    /// becomes the new left operand, giving strict left-to-right chaining.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] if resolving the pending operation
    /// divides by zero. The state is left untouched in that case.
    pub fn enter_operator(
        &mut self,
        operator: Operator,
    ) -> Result<(), CalcError> {
        let operand = match &self.pending {
            None => self.current_input.clone(),
            Some(pending) => {
                let result = evaluate(&pending.operand, pending.operator, &self.current_input)?;
                result_text(result)
            }
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.should_reset_display = true;
        self.current_input = ZERO.to_string();
        Ok(())
    }

    /// Resolves the pending operation into the current operand.
    ///
    /// Does nothing when no operation is pending. An operator with no right
    /// operand typed uses `"0"` as the right operand, so `5 + =` gives `5`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] and leaves the state untouched when
    /// the pending operation divides by zero.
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let Some(pending) = &self.pending else {
            return Ok(());
        };

        let result = evaluate(&pending.operand, pending.operator, &self.current_input)?;
        self.current_input = result_text(result);
        self.pending = None;
        self.should_reset_display = true;
        Ok(())
    }

    /// Restores the initial state.
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Resets only the operand being entered.
    pub fn clear_entry(&mut self) {
        self.current_input = ZERO.to_string();
    }

    /// Drops the last character of the current operand, leaving `"0"` rather
    /// than an empty operand.
    pub fn backspace(&mut self) {
        self.current_input.pop();
        if self.current_input.is_empty() {
            self.current_input = ZERO.to_string();
        }
    }

    /// Turns the current operand into a percentage.
    ///
    /// With an operation pending the result is that percentage of the left
    /// operand (`50 + 20 %` makes the current operand `10`). Otherwise the
    /// operand is divided by 100. Unparsable operands are left as they are.
    pub fn percentage(&mut self) {
        let Some(value) = parse_operand(&self.current_input) else {
            return;
        };

        let percent = match &self.pending {
            Some(pending) => parse_operand(&pending.operand).unwrap_or(0.0) * value / 100.0,
            None => value / 100.0,
        };

        self.current_input = result_text(percent);
        self.should_reset_display = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn digits(
        state: &mut CalculatorState,
        text: &str,
    ) {
        for c in text.chars() {
            state.enter_digit(Digit::from_char(c).unwrap());
        }
    }

    // =========================================================================
    // enter_digit tests
    // =========================================================================

    #[test]
    fn enter_digit_replaces_leading_zero() {
        let mut state = CalculatorState::new();
        digits(&mut state, "007");

        assert_eq!(state.current_input(), "7");
    }

    #[test]
    fn enter_digit_keeps_zero_before_point() {
        let mut state = CalculatorState::new();
        digits(&mut state, ".5");

        assert_eq!(state.current_input(), "0.5");
    }

    #[test]
    fn enter_digit_ignores_second_point() {
        let mut state = CalculatorState::new();
        digits(&mut state, "1.2.3");

        assert_eq!(state.current_input(), "1.23");
    }

    #[test]
    fn enter_digit_starts_fresh_operand_after_equals() {
        let mut state = CalculatorState::new();
        digits(&mut state, "2");
        state.enter_operator(Operator::Add).unwrap();
        digits(&mut state, "3");
        state.equals().unwrap();
        digits(&mut state, "4");

        assert_eq!(state.current_input(), "4");
        assert!(!state.should_reset_display());
    }

    // =========================================================================
    // enter_operator tests
    // =========================================================================

    #[test]
    fn enter_operator_captures_left_operand() {
        let mut state = CalculatorState::new();
        digits(&mut state, "12");
        state.enter_operator(Operator::Multiply).unwrap();

        assert_eq!(state.previous_input(), "12");
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(state.current_input(), "0");
        assert!(state.should_reset_display());
    }

    #[test]
    fn enter_operator_resolves_pending_operation() {
        let mut state = CalculatorState::new();
        digits(&mut state, "2");
        state.enter_operator(Operator::Add).unwrap();
        digits(&mut state, "3");
        state.enter_operator(Operator::Multiply).unwrap();

        assert_eq!(state.previous_input(), "5");
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn enter_operator_switch_resolves_with_zero_right_operand() {
        let mut state = CalculatorState::new();
        digits(&mut state, "5");
        state.enter_operator(Operator::Add).unwrap();
        state.enter_operator(Operator::Subtract).unwrap();

        assert_eq!(state.previous_input(), "5");
        assert_eq!(state.operator(), Some(Operator::Subtract));
    }

    #[test]
    fn enter_operator_division_by_zero_leaves_state_untouched() {
        let mut state = CalculatorState::new();
        digits(&mut state, "5");
        state.enter_operator(Operator::Divide).unwrap();
        digits(&mut state, "0");
        let before = state.clone();

        let result = state.enter_operator(Operator::Add);

        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(state, before);
    }

    // =========================================================================
    // equals tests
    // =========================================================================

    #[test]
    fn equals_without_operator_is_a_no_op() {
        let mut state = CalculatorState::new();
        digits(&mut state, "42");
        let before = state.clone();

        state.equals().unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn equals_trims_result() {
        let mut state = CalculatorState::new();
        digits(&mut state, "5");
        state.enter_operator(Operator::Divide).unwrap();
        digits(&mut state, "2");
        state.equals().unwrap();

        assert_eq!(state.current_input(), "2.5");
        assert_eq!(state.pending(), None);
        assert!(state.should_reset_display());
    }

    // =========================================================================
    // clear / backspace tests
    // =========================================================================

    #[test]
    fn clear_entry_keeps_pending_operation() {
        let mut state = CalculatorState::new();
        digits(&mut state, "9");
        state.enter_operator(Operator::Subtract).unwrap();
        digits(&mut state, "4");
        state.clear_entry();

        assert_eq!(state.current_input(), "0");
        assert_eq!(state.previous_input(), "9");
        assert_eq!(state.operator(), Some(Operator::Subtract));
    }

    #[test]
    fn backspace_drops_last_character() {
        let mut state = CalculatorState::new();
        digits(&mut state, "123");
        state.backspace();

        assert_eq!(state.current_input(), "12");
    }

    #[test]
    fn backspace_on_single_character_leaves_zero() {
        let mut state = CalculatorState::new();
        digits(&mut state, "8");
        state.backspace();

        assert_eq!(state.current_input(), "0");
    }

    #[test]
    fn backspace_on_negative_result_leaves_sign() {
        let mut state = CalculatorState::new();
        digits(&mut state, "2");
        state.enter_operator(Operator::Subtract).unwrap();
        digits(&mut state, "7");
        state.equals().unwrap();
        state.backspace();

        assert_eq!(state.current_input(), "-");
    }

    // =========================================================================
    // percentage tests
    // =========================================================================

    #[test]
    fn percentage_of_left_operand() {
        let mut state = CalculatorState::new();
        digits(&mut state, "200");
        state.enter_operator(Operator::Subtract).unwrap();
        digits(&mut state, "15");
        state.percentage();

        assert_eq!(state.current_input(), "30");
        assert_eq!(state.previous_input(), "200");
        assert_eq!(state.operator(), Some(Operator::Subtract));
    }

    #[test]
    fn percentage_without_operator_divides_by_hundred() {
        let mut state = CalculatorState::new();
        digits(&mut state, "7");
        state.percentage();

        assert_eq!(state.current_input(), "0.07");
    }

    #[test]
    fn percentage_on_unparsable_operand_is_a_no_op() {
        let mut state = CalculatorState::new();
        digits(&mut state, "3");
        state.enter_operator(Operator::Subtract).unwrap();
        digits(&mut state, "5");
        state.equals().unwrap();
        state.backspace();
        let before = state.clone();

        state.percentage();

        assert_eq!(state, before);
    }

    #[test]
    fn digits_after_percentage_extend_the_value() {
        let mut state = CalculatorState::new();
        digits(&mut state, "50");
        state.percentage();
        digits(&mut state, "5");

        assert_eq!(state.current_input(), "0.55");
    }
}
