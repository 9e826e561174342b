use thiserror::Error;

use crate::Operator;
use crate::calculations::common::{parse_operand, round_result};

/// Errors a calculation can raise.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The pending operation divides by a zero right operand.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Resolves `previous <operator> current` from operand text.
///
/// If either operand fails to parse, the result falls back to the value of
/// `current` (or 0). Results are rounded to eight decimal places.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing by a zero right operand.
///
/// # Examples
///
/// ```
/// use calc_core::Operator;
/// use calc_core::calculations::evaluate;
///
/// assert_eq!(evaluate("2", Operator::Add, "3"), Ok(5.0));
/// assert_eq!(evaluate("0.1", Operator::Add, "0.2"), Ok(0.3));
/// assert!(evaluate("5", Operator::Divide, "0").is_err());
/// ```
pub fn evaluate(
    previous: &str,
    operator: Operator,
    current: &str,
) -> Result<f64, CalcError> {
    let (Some(left), Some(right)) = (parse_operand(previous), parse_operand(current)) else {
        return Ok(parse_operand(current).unwrap_or(0.0));
    };

    let result = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            left / right
        }
    };

    Ok(round_result(result))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn evaluate_applies_each_operator() {
        assert_eq!(evaluate("8", Operator::Add, "2"), Ok(10.0));
        assert_eq!(evaluate("8", Operator::Subtract, "2"), Ok(6.0));
        assert_eq!(evaluate("8", Operator::Multiply, "2"), Ok(16.0));
        assert_eq!(evaluate("8", Operator::Divide, "2"), Ok(4.0));
    }

    #[test]
    fn evaluate_rounds_to_eight_places() {
        assert_eq!(evaluate("1", Operator::Divide, "3"), Ok(0.33333333));
    }

    #[test]
    fn evaluate_rejects_division_by_zero() {
        assert_eq!(
            evaluate("5", Operator::Divide, "0"),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate("5", Operator::Divide, "0."),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn evaluate_falls_back_to_current_when_previous_is_unparsable() {
        assert_eq!(evaluate("-", Operator::Multiply, "7"), Ok(7.0));
    }

    #[test]
    fn evaluate_falls_back_to_zero_when_both_are_unparsable() {
        assert_eq!(evaluate("-", Operator::Add, "."), Ok(0.0));
    }

    #[test]
    fn evaluate_accepts_trailing_decimal_point() {
        assert_eq!(evaluate("5.", Operator::Add, "1"), Ok(6.0));
    }
}
