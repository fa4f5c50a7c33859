use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Tolerance under which a float is treated as exactly zero.
///
/// Used for complex normalization, numeric equality, integer checks and
/// truthiness.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `value` lies within [`EPSILON`] of zero.
///
/// ## Example
/// ```
/// use calcite::util::num::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(approx_zero(-1e-10));
/// assert!(!approx_zero(1e-6));
/// ```
#[must_use]
pub fn approx_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Snaps a near-zero value to exactly `0.0`, leaving everything else as-is.
///
/// This also turns `-0.0` into `0.0`.
#[must_use]
pub fn snap_zero(value: f64) -> f64 {
    if approx_zero(value) { 0.0 } else { value }
}

/// Returns `true` if `value` is within [`EPSILON`] of an integer.
///
/// ## Example
/// ```
/// use calcite::util::num::is_integral;
///
/// assert!(is_integral(3.0));
/// assert!(is_integral(2.999_999_999_9));
/// assert!(!is_integral(2.5));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    (value - value.round()).abs() <= EPSILON
}

/// Converts an integral, non-negative `f64` into an iteration count.
///
/// The caller must already have checked [`is_integral`]. Values beyond
/// `u64::MAX` saturate, which is the behavior of the `as` conversion.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn iteration_count(value: f64) -> u64 {
    value.abs().round() as u64
}

/// Decodes the text of a numeric literal token.
///
/// Supports the radix prefixes `0b`, `0o` and `0x` (either case) as well as
/// plain decimal and floating point forms such as `42`, `3.5`, `.5` and
/// `1e3`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidLiteral` if the text is empty, has an empty
/// digit run after a radix prefix, or contains a digit outside the radix.
///
/// ## Example
/// ```
/// use calcite::util::num::parse_number_literal;
///
/// assert_eq!(parse_number_literal("0x1F", 1).unwrap(), 31.0);
/// assert_eq!(parse_number_literal("0b101", 1).unwrap(), 5.0);
/// assert_eq!(parse_number_literal("0o17", 1).unwrap(), 15.0);
/// assert_eq!(parse_number_literal("2.5e2", 1).unwrap(), 250.0);
/// assert!(parse_number_literal("0b102", 1).is_err());
/// ```
pub fn parse_number_literal(text: &str, line: usize) -> EvalResult<f64> {
    let invalid = || RuntimeError::InvalidLiteral { text: text.to_string(),
                                                    line };

    let radix = match text.get(..2) {
        Some("0b" | "0B") => Some(2),
        Some("0o" | "0O") => Some(8),
        Some("0x" | "0X") => Some(16),
        _ => None,
    };

    let Some(radix) = radix else {
        return text.parse::<f64>().map_err(|_| invalid());
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Err(invalid());
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
                      c.to_digit(radix)
                       .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
                       .ok_or_else(invalid)
                  })
}

/// Decodes the text of an imaginary literal token into its imaginary part.
///
/// The text must end in `i`. A bare `i` or `+i` is `1`, `-i` is `-1`, and
/// anything else in front of the suffix is decoded with
/// [`parse_number_literal`].
///
/// ## Errors
/// Returns `RuntimeError::InvalidLiteral` if the suffix is missing or the
/// coefficient cannot be decoded.
///
/// ## Example
/// ```
/// use calcite::util::num::parse_imaginary_literal;
///
/// assert_eq!(parse_imaginary_literal("i", 1).unwrap(), 1.0);
/// assert_eq!(parse_imaginary_literal("-i", 1).unwrap(), -1.0);
/// assert_eq!(parse_imaginary_literal("2.5i", 1).unwrap(), 2.5);
/// ```
pub fn parse_imaginary_literal(text: &str, line: usize) -> EvalResult<f64> {
    let Some(coefficient) = text.strip_suffix('i') else {
        return Err(RuntimeError::InvalidLiteral { text: text.to_string(),
                                                  line });
    };

    match coefficient {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_number_literal(coefficient, line),
    }
}
