//! statistical_tests::goodness_of_fit — χ² test against Benford's Law.
//!
//! Purpose
//! -------
//! Compare the observed first- or second-digit histogram of a set of values
//! with the Benford expectation and decide whether the deviation is
//! significant at a given level.
//!
//! Key behaviors
//! -------------
//! - Extract the digit at the requested [`DigitPosition`] from every value,
//!   discarding values without one (zeros, single-digit values for the second
//!   position).
//! - Build the histogram over the position's bins and the expected counts
//!   `P(d) · n`, where n is the number of extracted digits.
//! - Compute χ² = Σ (oᵢ − eᵢ)² / eᵢ with `bins − 1` degrees of freedom and its
//!   upper-tail p-value from the χ² survival function.
//! - Flag the sample as anomalous when `p_value < significance`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The significance level is validated before any computation.
//! - Expected counts below 5 make the χ² approximation unreliable. The
//!   permissive entry point ([`FitResult::benford_test`]) attaches one
//!   [`FitDiagnostic::LowExpectedCount`] per offending bin; the strict entry
//!   point ([`FitResult::benford_test_strict`]) returns
//!   `BenfordError::ExpectedCountTooLow` instead of a result.
//! - `FitResult` is immutable once produced.
//!
//! Conventions
//! -----------
//! - `bins`, `observed` and `expected` share the same ordering (ascending
//!   digits).
//! - The survival function is used directly rather than `1 − cdf`, so very
//!   small p-values stay distinguishable when ranking regions.
//!
//! Downstream usage
//! ----------------
//! - The analysis pipeline runs the strict test on the whole corpus.
//! - The localizer runs the strict test on each sub-range and turns errors
//!   into skip diagnostics.
//!
//! Testing notes
//! -------------
//! - Unit tests cover histogram bookkeeping, a hand-computed statistic,
//!   permissive vs. strict handling of small samples, Benford-conforming vs.
//!   uniform leading digits, and configuration errors.
use crate::digits::{DigitPosition, digit_at, expected_probabilities};
use crate::statistical_tests::errors::{BenfordError, BenfordResult};
use crate::statistical_tests::validation::{
    low_expected_counts, validate_expected_counts, validate_significance,
};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::{debug, warn};

/// How a fit test treats expected counts below 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Return the result with [`FitDiagnostic`]s attached.
    Permissive,
    /// Fail with `BenfordError::ExpectedCountTooLow`.
    Strict,
}

/// Structured warning attached to a [`FitResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FitDiagnostic {
    /// Expected count for `digit` is below 5; the p-value is approximate.
    LowExpectedCount { digit: u8, expected: f64 },
}

/// FitResult — outcome of one Benford χ² goodness-of-fit test.
///
/// Fields
/// ------
/// - `position`: digit position tested.
/// - `bins`: digits of the histogram, ascending.
/// - `observed`: observed count per bin.
/// - `expected`: expected count per bin, `P(d) · sample_size`.
/// - `statistic`: χ² statistic.
/// - `degrees_of_freedom`: `bins.len() − 1`.
/// - `p_value`: χ² upper-tail probability of `statistic`, in [0, 1].
/// - `significance`: level the verdict was taken at.
/// - `anomalous`: `p_value < significance`.
/// - `sample_size`: number of values with a digit at `position`.
/// - `diagnostics`: low-count warnings (always empty for strict results).
///
/// Invariants
/// ----------
/// - `observed.sum() == sample_size` and `sample_size > 0`.
/// - `expected.sum()` equals `sample_size` within floating tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    position: DigitPosition,
    bins: Vec<u8>,
    observed: Array1<u64>,
    expected: Array1<f64>,
    statistic: f64,
    degrees_of_freedom: usize,
    p_value: f64,
    significance: f64,
    anomalous: bool,
    sample_size: usize,
    diagnostics: Vec<FitDiagnostic>,
}

impl FitResult {
    /// Permissive Benford test: low expected counts become diagnostics.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `&[f64]`
    ///   Sample to test. Zeros and values without a digit at `position` are
    ///   ignored.
    /// - `position`: [`DigitPosition`]
    ///   First or second significant digit.
    /// - `significance`: `f64`
    ///   Level α, must satisfy 0 < α < 1.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::InvalidSignificanceLevel` for α outside (0, 1).
    /// - `BenfordError::NoExtractableDigits` when no value has a digit at
    ///   `position`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_benford::digits::DigitPosition;
    /// use rust_benford::statistical_tests::FitResult;
    ///
    /// // Every leading digit equally often: far from Benford.
    /// let values: Vec<f64> = (0..900).map(|i| ((i % 9) + 1) as f64 * 1000.0 + 0.5).collect();
    /// let fit = FitResult::benford_test(&values, DigitPosition::First, 0.05).unwrap();
    /// assert!(fit.anomalous());
    /// ```
    pub fn benford_test(
        values: &[f64], position: DigitPosition, significance: f64,
    ) -> BenfordResult<Self> {
        Self::run(values, position, significance, ValidationMode::Permissive)
    }

    /// Strict Benford test: any expected count below 5 is an error.
    ///
    /// Errors
    /// ------
    /// - Everything [`FitResult::benford_test`] returns, plus
    ///   `BenfordError::ExpectedCountTooLow { digit, expected }` for the
    ///   first offending bin.
    pub fn benford_test_strict(
        values: &[f64], position: DigitPosition, significance: f64,
    ) -> BenfordResult<Self> {
        Self::run(values, position, significance, ValidationMode::Strict)
    }

    /// Run the test under an explicit [`ValidationMode`].
    pub fn run(
        values: &[f64], position: DigitPosition, significance: f64, mode: ValidationMode,
    ) -> BenfordResult<Self> {
        validate_significance(significance)?;

        let table = expected_probabilities(position);
        let observed = calc_histogram(values, position);
        let sample_size = observed.sum() as usize;
        if sample_size == 0 {
            return Err(BenfordError::NoExtractableDigits);
        }
        let expected_counts = table.expected_counts(sample_size);

        let diagnostics = match mode {
            ValidationMode::Strict => {
                validate_expected_counts(&table.bins, &expected_counts)?;
                Vec::new()
            }
            ValidationMode::Permissive => {
                let low = low_expected_counts(&table.bins, &expected_counts);
                for &(digit, count) in &low {
                    warn!(
                        digit,
                        expected = count,
                        "chi-square assumption violated: expected count < 5"
                    );
                }
                low.into_iter()
                    .map(|(digit, expected)| FitDiagnostic::LowExpectedCount { digit, expected })
                    .collect()
            }
        };

        let expected = Array1::from(expected_counts);
        let statistic = calc_chi_square(&observed, &expected);
        let degrees_of_freedom = table.bins.len() - 1;
        let p_value = calc_p_value(statistic, degrees_of_freedom)?;
        let anomalous = p_value < significance;

        debug!(
            ?position,
            sample_size, statistic, p_value, significance, anomalous, "benford fit test"
        );

        Ok(FitResult {
            position,
            bins: table.bins.clone(),
            observed,
            expected,
            statistic,
            degrees_of_freedom,
            p_value,
            significance,
            anomalous,
            sample_size,
            diagnostics,
        })
    }

    pub fn position(&self) -> DigitPosition {
        self.position
    }

    pub fn bins(&self) -> &[u8] {
        &self.bins
    }

    /// Observed count per bin.
    pub fn observed(&self) -> &Array1<u64> {
        &self.observed
    }

    /// Expected count per bin under Benford's Law.
    pub fn expected(&self) -> &Array1<f64> {
        &self.expected
    }

    /// χ² statistic.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.degrees_of_freedom
    }

    /// Upper-tail χ² p-value of [`statistic`](Self::statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    /// Whether `p_value < significance`.
    pub fn anomalous(&self) -> bool {
        self.anomalous
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn diagnostics(&self) -> &[FitDiagnostic] {
        &self.diagnostics
    }
}

//
// ---------- Private helpers ----------
//

/// Count digits at `position` per bin; values without a digit are skipped.
fn calc_histogram(values: &[f64], position: DigitPosition) -> Array1<u64> {
    let mut counts = Array1::<u64>::zeros(position.n_bins());
    let slots = values
        .iter()
        .filter_map(|&x| digit_at(x, position))
        .filter_map(|d| position.bin_index(d));
    for slot in slots {
        counts[slot] += 1;
    }
    counts
}

/// Pearson χ² = Σ (oᵢ − eᵢ)² / eᵢ. Expected counts are strictly positive
/// whenever at least one digit was extracted.
#[inline]
fn calc_chi_square(observed: &Array1<u64>, expected: &Array1<f64>) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

/// Upper-tail probability P(χ²_df ≥ statistic).
#[inline]
fn calc_p_value(statistic: f64, degrees_of_freedom: usize) -> BenfordResult<f64> {
    let dist = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| BenfordError::Distribution(e.to_string()))?;
    Ok(dist.sf(statistic).clamp(0.0, 1.0))
}
