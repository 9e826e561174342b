use std::fmt;

/// A single keypad entry for the operand being typed: `0`-`9` or the
/// decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    /// The decimal digit `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is greater than 9. In a const context this is a compile
    /// error.
    pub const fn decimal(n: u8) -> Self {
        assert!(n <= 9, "decimal digit out of range");
        Self((b'0' + n) as char)
    }

    /// Accepts ASCII digits, `.` and `,` (the latter normalized to `.`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self(c)),
            ',' => Some(Self::POINT),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
