use std::fmt;

use crate::{Digit, Operator};

/// A discrete user action, produced by a button, a key press, or a replayed
/// key script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    Backspace,
    Percentage,
}

impl Action {
    /// Maps a key to its action.
    ///
    /// `key` is either the character a key produced (`"7"`, `"+"`, `"%"`) or a
    /// named key (`"Enter"`, `"escape"`); names match case-insensitively.
    /// `shift` is the state of the shift modifier, used for the shift+5
    /// percentage binding.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::{Action, Operator};
    ///
    /// assert_eq!(Action::from_key("x", false), Some(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_key("Enter", false), Some(Action::Equals));
    /// assert_eq!(Action::from_key("5", true), Some(Action::Percentage));
    /// assert_eq!(Action::from_key("q", false), None);
    /// ```
    pub fn from_key(
        key: &str,
        shift: bool,
    ) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c, shift);
        }

        const NAMED: [(&str, Action); 4] = [
            ("enter", Action::Equals),
            ("escape", Action::ClearAll),
            ("backspace", Action::Backspace),
            ("delete", Action::ClearEntry),
        ];
        NAMED
            .iter()
            .find(|(name, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, action)| *action)
    }

    /// Maps a platform key event to its action.
    ///
    /// The produced character (`key_char`) already reflects shift and the
    /// keyboard layout, so it is matched without the shift+5 binding; that
    /// binding only applies to the key name when no character was produced.
    /// On layouts where shift+5 types `5`, the key stays a digit.
    pub fn from_keystroke(
        key: &str,
        key_char: Option<&str>,
        shift: bool,
    ) -> Option<Self> {
        key_char
            .and_then(|ch| Self::from_key(ch, false))
            .or_else(|| Self::from_key(key, shift && key_char.is_none()))
    }

    fn from_char(
        c: char,
        shift: bool,
    ) -> Option<Self> {
        match c {
            '5' if shift => Some(Self::Percentage),
            '%' => Some(Self::Percentage),
            '=' => Some(Self::Equals),
            _ => Digit::from_char(c)
                .map(Self::Digit)
                .or_else(|| Operator::from_char(c).map(Self::Operator)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "digit({digit})"),
            Self::Operator(operator) => write!(f, "operator({})", operator.as_char()),
            Self::Equals => f.write_str("equals"),
            Self::ClearAll => f.write_str("clearAll"),
            Self::ClearEntry => f.write_str("clearEntry"),
            Self::Backspace => f.write_str("backspace"),
            Self::Percentage => f.write_str("percentage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn digit(c: char) -> Option<Action> {
        Digit::from_char(c).map(Action::Digit)
    }

    #[test]
    fn digit_keys_map_to_digits() {
        for c in '0'..='9' {
            assert_eq!(Action::from_key(&c.to_string(), false), digit(c));
        }
    }

    #[test]
    fn point_and_comma_map_to_decimal_point() {
        assert_eq!(
            Action::from_key(".", false),
            Some(Action::Digit(Digit::POINT))
        );
        assert_eq!(
            Action::from_key(",", false),
            Some(Action::Digit(Digit::POINT))
        );
    }

    #[test]
    fn operator_keys_map_to_operators() {
        assert_eq!(
            Action::from_key("+", false),
            Some(Action::Operator(Operator::Add))
        );
        assert_eq!(
            Action::from_key("-", false),
            Some(Action::Operator(Operator::Subtract))
        );
        assert_eq!(
            Action::from_key("*", false),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            Action::from_key("X", false),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            Action::from_key("/", false),
            Some(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn named_keys_match_case_insensitively() {
        assert_eq!(Action::from_key("Enter", false), Some(Action::Equals));
        assert_eq!(Action::from_key("enter", false), Some(Action::Equals));
        assert_eq!(Action::from_key("Escape", false), Some(Action::ClearAll));
        assert_eq!(Action::from_key("BACKSPACE", false), Some(Action::Backspace));
        assert_eq!(Action::from_key("Delete", false), Some(Action::ClearEntry));
    }

    #[test]
    fn percent_and_shift_five_map_to_percentage() {
        assert_eq!(Action::from_key("%", false), Some(Action::Percentage));
        assert_eq!(Action::from_key("5", true), Some(Action::Percentage));
    }

    #[test]
    fn produced_character_wins_over_key_name() {
        // US layout: shift+5 produces `%`.
        assert_eq!(
            Action::from_keystroke("5", Some("%"), true),
            Some(Action::Percentage)
        );
        // AZERTY: shift on the `(` key produces `5`.
        assert_eq!(Action::from_keystroke("5", Some("5"), true), digit('5'));
        assert_eq!(
            Action::from_keystroke("8", Some("*"), true),
            Some(Action::Operator(Operator::Multiply))
        );
    }

    #[test]
    fn key_name_is_used_when_no_character_is_produced() {
        assert_eq!(
            Action::from_keystroke("enter", None, false),
            Some(Action::Equals)
        );
        assert_eq!(
            Action::from_keystroke("5", None, true),
            Some(Action::Percentage)
        );
    }

    #[test]
    fn named_key_with_control_character_still_maps() {
        assert_eq!(
            Action::from_keystroke("backspace", Some("\u{8}"), false),
            Some(Action::Backspace)
        );
    }

    #[test]
    fn equals_key_maps_to_equals() {
        assert_eq!(Action::from_key("=", false), Some(Action::Equals));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(Action::from_key("a", false), None);
        assert_eq!(Action::from_key("tab", false), None);
        assert_eq!(Action::from_key("", false), None);
    }

    #[test]
    fn display_uses_action_names() {
        assert_eq!(Action::ClearEntry.to_string(), "clearEntry");
        assert_eq!(
            Action::Operator(Operator::Multiply).to_string(),
            "operator(*)"
        );
    }
}
