//! Renders a [`CalculatorState`] as display text plus a font-size hint.
//!
//! The formatter is pure: the same state always yields the same
//! [`DisplayText`]. How the hint maps to an actual font size is up to the
//! display sink.

use serde::{Deserialize, Serialize};

use crate::CalculatorState;
use crate::calculations::common::{parse_operand, to_exponential, trim_trailing_zeros};

/// Longest text shown before numbers are switched to exponent form.
const MAX_DISPLAY_CHARS: usize = 20;
/// Longest operand kept verbatim inside an overflowing expression.
const MAX_OPERAND_CHARS: usize = 10;
const EXPRESSION_FRACTION_DIGITS: usize = 5;
const NUMBER_FRACTION_DIGITS: usize = 8;

/// Size hint for the display, chosen from the rendered text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeTier {
    #[default]
    Large,
    Medium,
    Small,
}

impl FontSizeTier {
    /// `Small` above 12 characters, `Medium` above 8, otherwise `Large`.
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            n if n > 12 => Self::Small,
            n if n > 8 => Self::Medium,
            _ => Self::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }
}

/// What the display sink should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText {
    pub text: String,
    pub font_size: FontSizeTier,
}

/// Formats the state as `"<prev> <op>"`, `"<prev> <op> <current>"` or the
/// current operand alone, compacting overlong numbers.
pub fn format_display(state: &CalculatorState) -> DisplayText {
    let text = match state.pending() {
        Some(pending) => {
            let previous = trim_trailing_zeros(&pending.operand);
            let symbol = pending.operator.symbol();
            if state.awaiting_operand() {
                format!("{previous} {symbol}")
            } else {
                format!("{previous} {symbol} {}", state.current_input())
            }
        }
        None => state.current_input().to_string(),
    };

    let text = compact_overflow(text);
    let font_size = FontSizeTier::for_text(&text);

    DisplayText { text, font_size }
}

/// Switches overlong text to exponent form. Text ending in a decimal point
/// is left alone so the point the user just typed stays visible.
fn compact_overflow(text: String) -> String {
    if text.chars().count() <= MAX_DISPLAY_CHARS || text.ends_with('.') {
        return text;
    }

    let parts: Vec<&str> = text.split(' ').collect();
    match parts.as_slice() {
        [left, symbol, right] => format!(
            "{} {symbol} {}",
            compact_operand(left),
            compact_operand(right)
        ),
        _ => match parse_operand(&text) {
            Some(value) => to_exponential(value, NUMBER_FRACTION_DIGITS),
            None => text,
        },
    }
}

fn compact_operand(operand: &str) -> String {
    if operand.chars().count() <= MAX_OPERAND_CHARS {
        return operand.to_string();
    }
    match parse_operand(operand) {
        Some(value) => to_exponential(value, EXPRESSION_FRACTION_DIGITS),
        None => operand.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Operator, PendingOperation};

    fn state(
        current: &str,
        reset: bool,
        pending: Option<(&str, Operator)>,
    ) -> CalculatorState {
        CalculatorState {
            current_input: current.to_string(),
            should_reset_display: reset,
            pending: pending.map(|(operand, operator)| PendingOperation {
                operand: operand.to_string(),
                operator,
            }),
        }
    }

    // =========================================================================
    // expression assembly
    // =========================================================================

    #[test]
    fn lone_operand_renders_verbatim() {
        let display = format_display(&state("12.", false, None));

        assert_eq!(display.text, "12.");
        assert_eq!(display.font_size, FontSizeTier::Large);
    }

    #[test]
    fn operator_without_right_operand_renders_two_parts() {
        let display = format_display(&state("0", true, Some(("5", Operator::Add))));

        assert_eq!(display.text, "5 +");
    }

    #[test]
    fn operator_with_right_operand_renders_three_parts() {
        let display = format_display(&state("3", false, Some(("5", Operator::Multiply))));

        assert_eq!(display.text, "5 × 3");
    }

    #[test]
    fn typed_zero_right_operand_is_shown() {
        let display = format_display(&state("0", false, Some(("5", Operator::Divide))));

        assert_eq!(display.text, "5 / 0");
    }

    #[test]
    fn previous_operand_is_trimmed() {
        let display = format_display(&state("0", true, Some(("2.50", Operator::Subtract))));

        assert_eq!(display.text, "2.5 -");
    }

    // =========================================================================
    // overflow handling
    // =========================================================================

    #[test]
    fn long_lone_number_switches_to_exponent_form() {
        let display = format_display(&state("123456789012345678901", false, None));

        assert_eq!(display.text, "1.23456789e+20");
    }

    #[test]
    fn long_number_ending_in_point_is_kept() {
        let display = format_display(&state("12345678901234567890.", false, None));

        assert_eq!(display.text, "12345678901234567890.");
    }

    #[test]
    fn long_operands_in_expression_are_compacted() {
        let display = format_display(&state(
            "98765432109",
            false,
            Some(("123456789012", Operator::Add)),
        ));

        assert_eq!(display.text, "1.23457e+11 + 9.87654e+10");
    }

    #[test]
    fn compacted_operand_rounds_halfway_digit_up() {
        let display = format_display(&state(
            "1234567890",
            false,
            Some(("12345650000", Operator::Add)),
        ));

        assert_eq!(display.text, "1.23457e+10 + 1234567890");
    }

    #[test]
    fn short_operand_in_long_expression_is_kept() {
        let display = format_display(&state(
            "7",
            false,
            Some(("12345678901234567", Operator::Add)),
        ));

        assert_eq!(display.text, "1.23457e+16 + 7");
    }

    #[test]
    fn long_previous_operand_with_operator_collapses_to_one_number() {
        let display = format_display(&state(
            "0",
            true,
            Some(("1234567890123456789", Operator::Divide)),
        ));

        assert_eq!(display.text, "1.23456789e+18");
    }

    #[test]
    fn twenty_characters_is_not_overflow() {
        let display = format_display(&state("12345678901234567890", false, None));

        assert_eq!(display.text, "12345678901234567890");
    }

    // =========================================================================
    // font size tiers
    // =========================================================================

    #[test]
    fn font_size_tier_boundaries() {
        assert_eq!(FontSizeTier::for_text("12345678"), FontSizeTier::Large);
        assert_eq!(FontSizeTier::for_text("123456789"), FontSizeTier::Medium);
        assert_eq!(FontSizeTier::for_text("123456789012"), FontSizeTier::Medium);
        assert_eq!(FontSizeTier::for_text("1234567890123"), FontSizeTier::Small);
    }

    #[test]
    fn font_size_counts_characters_not_bytes() {
        // "×" is two bytes but one character.
        assert_eq!(FontSizeTier::for_text("1234 × 12"), FontSizeTier::Medium);
        assert_eq!(FontSizeTier::for_text("123 × 12"), FontSizeTier::Large);
    }
}
