//! statistical_tests::validation — shared guards for Benford routines.
//!
//! Purpose
//! -------
//! Centralize the configuration and statistical-validity checks used by the
//! fit test, the localizer and the analysis pipeline, so each guard is
//! written once and produces the same [`BenfordError`] everywhere.
//!
//! Key behaviors
//! -------------
//! - [`validate_significance`] enforces 0 < α < 1.
//! - [`validate_max_depth`] enforces a bisection depth in
//!   1..=[`MAX_DEPTH_LIMIT`], so the number of possible tests
//!   2^(depth+1) − 1 always fits in a `usize`.
//! - [`validate_min_range_len`] keeps localized ranges at or above
//!   [`MIN_RANGE_FLOOR`] values.
//! - [`low_expected_counts`] lists bins whose expected count is below
//!   [`MIN_EXPECTED_COUNT`]; [`validate_expected_counts`] turns the first such
//!   bin into a hard error.
//!
//! Invariants & assumptions
//! ------------------------
//! - Guards perform no I/O and allocate only for the returned list.
//! - NaN significance levels are rejected (comparisons with NaN are false).
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and the success paths.
use crate::statistical_tests::errors::{BenfordError, BenfordResult};

/// Smallest expected bin count for which the χ² approximation is trusted.
pub const MIN_EXPECTED_COUNT: f64 = 5.0;

/// Deepest bisection level accepted by [`validate_max_depth`].
pub const MAX_DEPTH_LIMIT: usize = usize::BITS as usize - 2;

/// Smallest sub-range the localizer may evaluate.
pub const MIN_RANGE_FLOOR: usize = 50;

/// Validate a significance level α.
///
/// Errors
/// ------
/// - `BenfordError::InvalidSignificanceLevel(alpha)` unless `0 < alpha < 1`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_benford::statistical_tests::validation::validate_significance;
/// assert!(validate_significance(0.05).is_ok());
/// assert!(validate_significance(1.0).is_err());
/// ```
pub fn validate_significance(alpha: f64) -> BenfordResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(BenfordError::InvalidSignificanceLevel(alpha))
    }
}

/// Validate the bisection depth bound.
///
/// Errors
/// ------
/// - `BenfordError::InvalidMaxDepth(max_depth)` when `max_depth == 0` or
///   `max_depth > MAX_DEPTH_LIMIT`.
pub fn validate_max_depth(max_depth: usize) -> BenfordResult<()> {
    if (1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        Ok(())
    } else {
        Err(BenfordError::InvalidMaxDepth(max_depth))
    }
}

/// Validate the localization size floor.
///
/// Errors
/// ------
/// - `BenfordError::InvalidMinRangeLen(len)` when `len < MIN_RANGE_FLOOR`.
pub fn validate_min_range_len(len: usize) -> BenfordResult<()> {
    if len < MIN_RANGE_FLOOR { Err(BenfordError::InvalidMinRangeLen(len)) } else { Ok(()) }
}

/// Bins (digit, expected count) whose expected count is below
/// [`MIN_EXPECTED_COUNT`], in bin order.
pub fn low_expected_counts(bins: &[u8], expected: &[f64]) -> Vec<(u8, f64)> {
    bins.iter()
        .zip(expected)
        .filter(|&(_, &e)| e < MIN_EXPECTED_COUNT)
        .map(|(&d, &e)| (d, e))
        .collect()
}

/// Strict χ² validity check on expected counts.
///
/// Errors
/// ------
/// - `BenfordError::ExpectedCountTooLow { digit, expected }` for the first
///   bin (in bin order) below [`MIN_EXPECTED_COUNT`].
pub fn validate_expected_counts(bins: &[u8], expected: &[f64]) -> BenfordResult<()> {
    match bins.iter().zip(expected).find(|&(_, &e)| e < MIN_EXPECTED_COUNT) {
        Some((&digit, &expected)) => Err(BenfordError::ExpectedCountTooLow { digit, expected }),
        None => Ok(()),
    }
}
