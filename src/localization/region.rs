//! localization::region — result types of the bisection search.
//!
//! Purpose
//! -------
//! Describe what the localizer found (anomalous regions), what it could not
//! evaluate (skip diagnostics), and the bookkeeping needed to interpret the
//! corrected significance level.
//!
//! Conventions
//! -----------
//! - `start` / `end` are inclusive original positions taken from the corpus,
//!   not offsets into the tested slice.
//! - Depth 1 is the whole corpus.
use crate::statistical_tests::errors::BenfordError;
use serde::{Deserialize, Serialize};

/// AnomalyRegion — a contiguous range whose digits deviate from Benford.
///
/// Fields
/// ------
/// - `start`, `end`: inclusive original positions of the first and last value.
/// - `len`: number of values tested in the range.
/// - `p_value`: p-value of the strict fit test on the range.
/// - `depth`: recursion depth at which the range was evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRegion {
    pub start: usize,
    pub end: usize,
    pub len: usize,
    pub p_value: f64,
    pub depth: usize,
}

/// Why a range was evaluated but produced no verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocalizationDiagnostic {
    /// The strict fit test failed on `[start, end]`; the branch was dropped.
    SkippedRange { start: usize, end: usize, depth: usize, reason: BenfordError },
}

/// Localization — ranked regions plus search bookkeeping.
///
/// Fields
/// ------
/// - `regions`: at most `max_regions` regions, ascending by p-value.
/// - `diagnostics`: one entry per skipped range, in visiting order.
/// - `corrected_significance`: level every range was tested at.
/// - `tests_run`: number of ranges for which a fit test produced a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localization {
    pub regions: Vec<AnomalyRegion>,
    pub diagnostics: Vec<LocalizationDiagnostic>,
    pub corrected_significance: f64,
    pub tests_run: usize,
}

impl Localization {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
