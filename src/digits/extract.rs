//! digits::extract — first and second significant digits of a value.
//!
//! Purpose
//! -------
//! Read the leading significant decimal digits of a real number in a way that
//! does not depend on how the value happens to be formatted at its magnitude.
//!
//! Key behaviors
//! -------------
//! - [`first_digit`] returns the first nonzero digit of |x| (1..=9).
//! - [`second_digit`] returns the digit that follows it (0..=9), or `None`
//!   when |x| has a single significant digit.
//! - [`digit_at`] dispatches on [`DigitPosition`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero, NaN and ±∞ have no significant digits; all functions return `None`
//!   and never panic.
//! - The magnitude is normalized to a significand in [1, 10) and a decimal
//!   exponent. Significand digits are taken from the shortest decimal string
//!   that round-trips to the same `f64`, always in exponent form, so 1e-10 and
//!   1e12 go through exactly the same path as 123.45. Dividing by powers of
//!   ten is avoided because it drifts (0.3 / 0.1 = 2.9999999999999996).
//! - Significant digits are those of the minimal plain decimal expansion:
//!   zeros of the integer part count (`100 → 1, 0, 0`), trailing zeros of the
//!   fractional part do not (`5.0 → 5`).
//!
//! Testing notes
//! -------------
//! - Unit tests pin the documented examples (0.00456, 123.45, 0.0), values at
//!   magnitude extremes, and a property test checking agreement with the
//!   leading character of the exponent-form string.
use crate::digits::position::DigitPosition;

/// Normalized magnitude: significand digits (no leading zeros) and the
/// decimal exponent of the first one.
struct Significand {
    digits: Vec<u8>,
    exponent: i32,
}

fn normalize(x: f64) -> Option<Significand> {
    let magnitude = x.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return None;
    }

    // `{:e}` is Rust's shortest round-trip representation: "1.2345e2", "4.56e-3", "1e12".
    let repr = format!("{magnitude:e}");
    let (mantissa, exponent) = repr.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: Vec<u8> =
        mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();

    match digits.first() {
        Some(&d) if d != 0 => Some(Significand { digits, exponent }),
        _ => None,
    }
}

/// First significant digit of |x|, in 1..=9.
///
/// Returns `None` for zero and non-finite inputs.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::digits::first_digit;
///
/// assert_eq!(first_digit(0.00456), Some(4));
/// assert_eq!(first_digit(-123.45), Some(1));
/// assert_eq!(first_digit(0.0), None);
/// ```
pub fn first_digit(x: f64) -> Option<u8> {
    normalize(x).map(|s| s.digits[0])
}

/// Second significant digit of |x|, in 0..=9.
///
/// Returns `None` for zero, non-finite inputs, and values with a single
/// significant digit (e.g. 5, 0.5, 1e-10). Integer-part zeros are
/// significant, so `second_digit(100.0) == Some(0)`.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::digits::second_digit;
///
/// assert_eq!(second_digit(123.45), Some(2));
/// assert_eq!(second_digit(7.0), None);
/// ```
pub fn second_digit(x: f64) -> Option<u8> {
    let significand = normalize(x)?;
    match significand.digits.get(1) {
        Some(&d) => Some(d),
        None if significand.exponent >= 1 => Some(0),
        None => None,
    }
}

/// Digit of `x` at `position`; see [`first_digit`] and [`second_digit`].
#[inline]
pub fn digit_at(x: f64, position: DigitPosition) -> Option<u8> {
    match position {
        DigitPosition::First => first_digit(x),
        DigitPosition::Second => second_digit(x),
    }
}
