//! statistical_tests::errors — shared error type and Python bridge.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by every Benford routine in
//! this crate (corpus construction, goodness-of-fit testing, localization,
//! and the analysis pipeline), together with a conversion to Python
//! exceptions for the PyO3 bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`BenfordResult`] and [`BenfordError`] as the canonical result
//!   and error types of the crate.
//! - Attach human-readable `Display` messages to each variant so that the
//!   single explanatory error returned to a caller is meaningful on its own.
//! - Implement `From<BenfordError> for PyErr`, mapping every variant to a
//!   `ValueError` when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration errors (`InvalidSignificanceLevel`, `InvalidMaxDepth`,
//!   `InvalidMinRangeLen`, `InvalidMaxRegions`, `InvalidKeywordFilter`) are
//!   raised before any computation is performed.
//! - `ExpectedCountTooLow` is only produced by strict-mode fit tests; the
//!   permissive path reports the same condition as a diagnostic instead.
//! - Variants are small, `Clone` and `PartialEq` so they can be stored inside
//!   localization diagnostics and compared in tests.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("must satisfy
//!   0 < α < 1") rather than low-level details.
//! - Indices carried by variants are 0-based positions in the corpus.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `Display` messages embed their payloads.
use crate::statistical_tests::validation::{MAX_DEPTH_LIMIT, MIN_RANGE_FLOOR};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};
use serde::{Deserialize, Serialize};

pub type BenfordResult<T> = Result<T, BenfordError>;

/// BenfordError — failures of Benford conformity analysis.
///
/// Variants
/// --------
/// - `InvalidSignificanceLevel(alpha)`
///   The significance level does not satisfy 0 < α < 1 (or is NaN).
/// - `InvalidMaxDepth(depth)`
///   The bisection depth bound is zero or exceeds `MAX_DEPTH_LIMIT`.
/// - `InvalidMinRangeLen(len)`
///   The localization size floor is below `MIN_RANGE_FLOOR` values.
/// - `InvalidMaxRegions(n)`
///   The number of regions to report is zero.
/// - `InsufficientData { required, actual }`
///   The corpus is smaller than the minimum sample size policy.
/// - `NonFiniteValue { index, value }`
///   A corpus value is NaN or ±∞.
/// - `PositionLengthMismatch { values, positions }`
///   Values and original positions differ in length.
/// - `NonIncreasingPosition { index }`
///   Original positions are not strictly increasing at `index`.
/// - `NoExtractableDigits`
///   No value carries a digit at the requested position, so the
///   histogram is empty.
/// - `ExpectedCountTooLow { digit, expected }`
///   Strict validation found a bin whose expected count is below 5, which
///   makes the χ² approximation unreliable.
/// - `InvalidKeywordFilter(msg)`
///   The metadata keyword list could not be compiled into a line filter.
/// - `Distribution(msg)`
///   The χ² reference distribution could not be constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BenfordError {
    // ---- Configuration ----
    InvalidSignificanceLevel(f64),
    InvalidMaxDepth(usize),
    InvalidMinRangeLen(usize),
    InvalidMaxRegions(usize),
    InvalidKeywordFilter(String),

    // ---- Sample / corpus ----
    InsufficientData { required: usize, actual: usize },
    NonFiniteValue { index: usize, value: f64 },
    PositionLengthMismatch { values: usize, positions: usize },
    NonIncreasingPosition { index: usize },

    // ---- Statistical validity ----
    NoExtractableDigits,
    ExpectedCountTooLow { digit: u8, expected: f64 },

    // ---- statrs ----
    Distribution(String),
}

impl std::error::Error for BenfordError {}

impl std::fmt::Display for BenfordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenfordError::InvalidSignificanceLevel(alpha) => {
                write!(f, "Invalid significance level: {alpha}. Must satisfy 0 < α < 1.")
            }
            BenfordError::InvalidMaxDepth(depth) => {
                write!(f, "Invalid max depth: {depth}. Must satisfy 1 ≤ depth ≤ {MAX_DEPTH_LIMIT}.")
            }
            BenfordError::InvalidMinRangeLen(len) => {
                write!(f, "Invalid min range length: {len}. Must be at least {MIN_RANGE_FLOOR}.")
            }
            BenfordError::InvalidMaxRegions(n) => {
                write!(f, "Invalid max regions: {n}. Must be at least 1.")
            }
            BenfordError::InvalidKeywordFilter(msg) => {
                write!(f, "Invalid metadata keyword filter: {msg}")
            }
            BenfordError::InsufficientData { required, actual } => {
                write!(
                    f,
                    "Insufficient data: {actual} values, at least {required} required for reliable analysis."
                )
            }
            BenfordError::NonFiniteValue { index, value } => {
                write!(f, "Value at index {index} is non-finite: {value}")
            }
            BenfordError::PositionLengthMismatch { values, positions } => {
                write!(f, "Got {values} values but {positions} original positions.")
            }
            BenfordError::NonIncreasingPosition { index } => {
                write!(f, "Original positions must be strictly increasing; violated at index {index}.")
            }
            BenfordError::NoExtractableDigits => {
                write!(f, "No value has an extractable digit at the requested position.")
            }
            BenfordError::ExpectedCountTooLow { digit, expected } => {
                write!(
                    f,
                    "Chi-square invalid: expected count {expected:.3} for digit {digit} is below 5. Consider a larger dataset."
                )
            }
            BenfordError::Distribution(msg) => {
                write!(f, "Failed to build reference distribution: {msg}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BenfordError> for PyErr {
    fn from(err: BenfordError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Payload embedding in `Display` messages for the variants callers are
    //   most likely to surface verbatim.
    //
    // They intentionally DO NOT cover:
    // - The `From<BenfordError> for PyErr` conversion, which needs the Python
    //   C API and is exercised from Python.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that an invalid significance level is echoed in the message.
    //
    // Given
    // -----
    // - `BenfordError::InvalidSignificanceLevel(1.5)`.
    //
    // Expect
    // ------
    // - The message contains "1.5".
    fn invalid_significance_level_includes_payload_in_display() {
        // Arrange
        let err = BenfordError::InvalidSignificanceLevel(1.5);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("1.5"), "Display should include the offending level.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the expected-count error names both the digit and the count.
    //
    // Given
    // -----
    // - `ExpectedCountTooLow { digit: 9, expected: 2.75 }`.
    //
    // Expect
    // ------
    // - The message contains "9" and "2.750".
    fn expected_count_too_low_includes_digit_and_count() {
        // Arrange
        let err = BenfordError::ExpectedCountTooLow { digit: 9, expected: 2.75 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("digit 9"), "missing digit in: {msg}");
        assert!(msg.contains("2.750"), "missing expected count in: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Check that the sample-size error reports both sizes.
    //
    // Given
    // -----
    // - `InsufficientData { required: 300, actual: 12 }`.
    //
    // Expect
    // ------
    // - The message contains "300" and "12".
    fn insufficient_data_reports_required_and_actual() {
        let msg = BenfordError::InsufficientData { required: 300, actual: 12 }.to_string();

        assert!(msg.contains("300") && msg.contains("12"), "Got: {msg}");
    }
}
