//! analysis::options — configuration of the end-to-end Benford analysis.
//!
//! Purpose
//! -------
//! Collect everything a single analysis request needs (significance level,
//! bisection depth, digit position and the sample-size policy) in one value
//! that can be validated up front.
//!
//! Key behaviors
//! -------------
//! - [`AnalysisOptions::new`] validates the three user-facing knobs.
//! - `with_*` builders adjust the size policy and report length.
//! - [`AnalysisOptions::localizer_options`] derives the matching
//!   [`LocalizerOptions`] so both stages always agree.
//!
//! Invariants & assumptions
//! ------------------------
//! - `validate` is re-run by `analyze`, so options produced by builders or
//!   deserialization never reach the statistics unchecked.
use crate::digits::DigitPosition;
use crate::localization::LocalizerOptions;
use crate::localization::options::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_REGIONS, DEFAULT_MIN_RANGE_LEN, DEFAULT_SIGNIFICANCE,
};
use crate::statistical_tests::errors::BenfordResult;
use serde::{Deserialize, Serialize};

/// Smallest corpus the pipeline will analyse.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 300;

/// AnalysisOptions — validated configuration for [`crate::analysis::analyze`].
///
/// Fields
/// ------
/// - `significance`: nominal α for the whole-corpus test, in (0, 1).
/// - `max_depth`: bisection depth bound (≥ 1).
/// - `digit_position`: first or second significant digit.
/// - `min_sample_size`: corpora shorter than this are rejected.
/// - `min_range_len`: size floor for localized sub-ranges (≥ 50).
/// - `max_regions`: number of regions reported (≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    significance: f64,
    max_depth: usize,
    digit_position: DigitPosition,
    min_sample_size: usize,
    min_range_len: usize,
    max_regions: usize,
}

impl AnalysisOptions {
    /// Build options with the default size policy.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::InvalidSignificanceLevel` unless `0 < significance < 1`.
    /// - `BenfordError::InvalidMaxDepth` when `max_depth == 0`.
    pub fn new(
        significance: f64, max_depth: usize, digit_position: DigitPosition,
    ) -> BenfordResult<Self> {
        let opts = AnalysisOptions { significance, max_depth, digit_position, ..Self::default() };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_min_sample_size(mut self, min_sample_size: usize) -> Self {
        self.min_sample_size = min_sample_size;
        self
    }

    pub fn with_min_range_len(mut self, min_range_len: usize) -> Self {
        self.min_range_len = min_range_len;
        self
    }

    pub fn with_max_regions(mut self, max_regions: usize) -> Self {
        self.max_regions = max_regions;
        self
    }

    /// Check every field; delegates to the localizer's checks.
    pub fn validate(&self) -> BenfordResult<()> {
        self.localizer_options().map(|_| ())
    }

    /// Localizer configuration matching these options.
    pub fn localizer_options(&self) -> BenfordResult<LocalizerOptions> {
        LocalizerOptions::new(
            self.significance,
            self.max_depth,
            self.digit_position,
            self.min_range_len,
            self.max_regions,
        )
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

    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    pub fn min_range_len(&self) -> usize {
        self.min_range_len
    }

    pub fn max_regions(&self) -> usize {
        self.max_regions
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            significance: DEFAULT_SIGNIFICANCE,
            max_depth: DEFAULT_MAX_DEPTH,
            digit_position: DigitPosition::First,
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            min_range_len: DEFAULT_MIN_RANGE_LEN,
            max_regions: DEFAULT_MAX_REGIONS,
        }
    }
}
