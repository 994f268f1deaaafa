//! localization::options — validated configuration for the anomaly localizer.
//!
//! Purpose
//! -------
//! Bundle the knobs of the recursive bisection search into one validated
//! value.
//!
//! Key behaviors
//! -------------
//! - [`LocalizerOptions::new`] validates significance, depth bound, size
//!   floor and the number of reported regions before any computation.
//! - [`LocalizerOptions::default`] yields α = 0.05, depth 3, first digit,
//!   ranges of at least 50 values and at most 5 reported regions.
//! - [`corrected_significance`] derives the Bonferroni-corrected level from
//!   the nominal level and the depth bound.
//!
//! Invariants & assumptions
//! ------------------------
//! - Options built with `new` satisfy `0 < significance < 1`,
//!   `1 ≤ max_depth ≤ MAX_DEPTH_LIMIT`, `min_range_len ≥ 50` and
//!   `max_regions ≥ 1`. Deserialized options skip that check, so `localize`
//!   calls [`LocalizerOptions::validate`] again.
//! - `min_range_len` may be raised above 50 but never lowered below it.
use crate::digits::DigitPosition;
use crate::statistical_tests::errors::{BenfordError, BenfordResult};
use crate::statistical_tests::validation::{
    MIN_RANGE_FLOOR, validate_max_depth, validate_min_range_len, validate_significance,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;
pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_MIN_RANGE_LEN: usize = MIN_RANGE_FLOOR;
pub const DEFAULT_MAX_REGIONS: usize = 5;

/// LocalizerOptions — configuration of the bisection search.
///
/// Fields
/// ------
/// - `significance`: nominal level α before correction, in (0, 1).
/// - `max_depth`: deepest level evaluated; the whole corpus is depth 1.
/// - `digit_position`: digit tested in every range.
/// - `min_range_len`: ranges with fewer values are not evaluated; at least 50.
/// - `max_regions`: number of regions reported after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalizerOptions {
    significance: f64,
    max_depth: usize,
    digit_position: DigitPosition,
    min_range_len: usize,
    max_regions: usize,
}

impl LocalizerOptions {
    /// Build validated localizer options.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::InvalidSignificanceLevel` unless `0 < significance < 1`.
    /// - `BenfordError::InvalidMaxDepth` when `max_depth` is 0 or above
    ///   `MAX_DEPTH_LIMIT`.
    /// - `BenfordError::InvalidMinRangeLen` when `min_range_len < 50`.
    /// - `BenfordError::InvalidMaxRegions` when `max_regions == 0`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_benford::digits::DigitPosition;
    /// use rust_benford::localization::LocalizerOptions;
    ///
    /// let opts = LocalizerOptions::new(0.01, 4, DigitPosition::First, 50, 5).unwrap();
    /// assert_eq!(opts.max_depth(), 4);
    /// assert!(LocalizerOptions::new(0.01, 0, DigitPosition::First, 50, 5).is_err());
    /// ```
    pub fn new(
        significance: f64, max_depth: usize, digit_position: DigitPosition, min_range_len: usize,
        max_regions: usize,
    ) -> BenfordResult<Self> {
        let opts = LocalizerOptions {
            significance,
            max_depth,
            digit_position,
            min_range_len,
            max_regions,
        };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check the configuration invariants.
    pub fn validate(&self) -> BenfordResult<()> {
        validate_significance(self.significance)?;
        validate_max_depth(self.max_depth)?;
        validate_min_range_len(self.min_range_len)?;
        if self.max_regions == 0 {
            return Err(BenfordError::InvalidMaxRegions(self.max_regions));
        }
        Ok(())
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn digit_position(&self) -> DigitPosition {
        self.digit_position
    }

    pub fn min_range_len(&self) -> usize {
        self.min_range_len
    }

    pub fn max_regions(&self) -> usize {
        self.max_regions
    }

    /// Level applied to every range: α / (2^(max_depth+1) − 1).
    pub fn corrected_significance(&self) -> f64 {
        corrected_significance(self.significance, self.max_depth)
    }
}

impl Default for LocalizerOptions {
    fn default() -> Self {
        LocalizerOptions {
            significance: DEFAULT_SIGNIFICANCE,
            max_depth: DEFAULT_MAX_DEPTH,
            digit_position: DigitPosition::First,
            min_range_len: DEFAULT_MIN_RANGE_LEN,
            max_regions: DEFAULT_MAX_REGIONS,
        }
    }
}

/// Number of tests a full binary tree down to `max_depth` could run.
///
/// Saturates at `usize::MAX` for depths beyond the word size.
pub fn max_tests(max_depth: usize) -> usize {
    max_depth
        .checked_add(1)
        .and_then(|levels| u32::try_from(levels).ok())
        .and_then(|shift| 1usize.checked_shl(shift))
        .map_or(usize::MAX, |n| n - 1)
}

/// Bonferroni-corrected level `significance / (2^(max_depth+1) − 1)`.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::localization::corrected_significance;
///
/// assert!((corrected_significance(0.05, 3) - 0.05 / 15.0).abs() < 1e-15);
/// ```
pub fn corrected_significance(significance: f64, max_depth: usize) -> f64 {
    significance / max_tests(max_depth) as f64
}
