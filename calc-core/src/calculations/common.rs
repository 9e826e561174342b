//! Conversions between operand text and `f64` values.
//!
//! Parsing and rendering follow the number conventions of a web display:
//! leading numeric prefixes are accepted when parsing, and rendering switches
//! to exponent form for very small and very large magnitudes.

/// Scale used to round computed results to eight decimal places.
const RESULT_SCALE: f64 = 1e8;

/// Parses the longest numeric prefix of `text`.
///
/// Accepts an optional sign, digits with at most one decimal point, an
/// optional exponent, and `Infinity`. Returns `None` when no digits are found.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), Some(12.5));
/// assert_eq!(parse_operand("5."), Some(5.0));
/// assert_eq!(parse_operand("1e-"), Some(1.0));
/// assert_eq!(parse_operand("-"), None);
/// ```
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let end = numeric_prefix_len(rest);
    if end == 0 {
        return None;
    }
    rest[..end].parse::<f64>().ok().map(|value| sign * value)
}

/// Length of the leading `digits[.digits][e[+-]digits]` run, or 0 when the
/// mantissa has no digits.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let skip_digits = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = skip_digits(0);
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = skip_digits(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = skip_digits(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    end
}

/// Rounds to eight decimal places, with halves rounded toward positive
/// infinity.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::round_result;
///
/// assert_eq!(round_result(0.1 + 0.2), 0.3);
/// assert_eq!(round_result(2.0 / 3.0), 0.66666667);
/// ```
pub fn round_result(value: f64) -> f64 {
    let scaled = value * RESULT_SCALE;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / RESULT_SCALE
}

/// Renders a value with the shortest text that parses back to it.
///
/// Magnitudes in `[1e-6, 1e21)` are written positionally; anything else uses
/// exponent form with an explicit exponent sign (`1e-7`, `1.5e+21`).
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        format!("{value}")
    } else {
        sign_exponent(format!("{value:e}"))
    }
}

/// Fraction digits that hold the exact decimal expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 800;

/// Renders `value` in exponent form with exactly `fraction_digits` digits
/// after the decimal point, e.g. `1.23457e+11`.
///
/// Rounds from the exact decimal value, and a value exactly halfway between
/// two candidates takes the one with the larger magnitude.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::to_exponential;
///
/// assert_eq!(to_exponential(12345650000.0, 5), "1.23457e+10");
/// assert_eq!(to_exponential(-1.25, 1), "-1.3e+0");
/// ```
pub fn to_exponential(
    value: f64,
    fraction_digits: usize,
) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }

    let precision = EXACT_FRACTION_DIGITS.max(fraction_digits + 1);
    let exact = format!("{:.precision$e}", value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return sign_exponent(format!("{value:.fraction_digits$e}"));
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return sign_exponent(format!("{value:.fraction_digits$e}"));
    };

    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let round_up = digits.get(fraction_digits + 1).is_some_and(|&d| d >= b'5');
    digits.truncate(fraction_digits + 1);

    if round_up && increment_digits(&mut digits) {
        digits.insert(0, b'1');
        digits.truncate(fraction_digits + 1);
        exponent += 1;
    }

    let mut text = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        text.push('-');
    }
    text.push(char::from(digits[0]));
    if fraction_digits > 0 {
        text.push('.');
        text.extend(digits[1..].iter().copied().map(char::from));
    }
    sign_exponent(format!("{text}e{exponent}"))
}

/// Adds one to the last digit, carrying leftward. Returns `true` when the
/// carry runs off the front, leaving every digit `0`.
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Inserts `+` after the exponent marker when the exponent is non-negative.
fn sign_exponent(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Strips trailing zeros after a decimal point, and the point itself when
/// zeros directly followed it.
///
/// Text without a decimal point, or in exponent form, is returned unchanged.
/// A bare trailing point (`"5."`) is kept since the user may still be typing.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::trim_trailing_zeros;
///
/// assert_eq!(trim_trailing_zeros("2.50000000"), "2.5");
/// assert_eq!(trim_trailing_zeros("100.0"), "100");
/// assert_eq!(trim_trailing_zeros("100"), "100");
/// assert_eq!(trim_trailing_zeros("5."), "5.");
/// ```
pub fn trim_trailing_zeros(text: &str) -> String {
    if !text.contains('.') || text.contains(['e', 'E']) {
        return text.to_string();
    }

    let stripped = text.trim_end_matches('0');
    if stripped.len() == text.len() {
        return text.to_string();
    }
    stripped.strip_suffix('.').unwrap_or(stripped).to_string()
}

/// Renders a computed value and trims it for storage as operand text.
pub fn result_text(value: f64) -> String {
    trim_trailing_zeros(&number_to_string(value))
}
