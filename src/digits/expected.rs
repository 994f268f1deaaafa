//! digits::expected — Benford probability mass per digit position.
//!
//! Purpose
//! -------
//! Provide the theoretical Benford distribution used as the null hypothesis
//! of every goodness-of-fit test in the crate.
//!
//! Key behaviors
//! -------------
//! - First digit d ∈ {1,…,9}: P(d) = log₁₀(1 + 1/d).
//! - Second digit d ∈ {0,…,9}: P(d) = Σₖ₌₁⁹ log₁₀(1 + 1/(10k + d)).
//! - Tables are computed once per process and shared read-only through
//!   [`expected_probabilities`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Probabilities are ordered like [`DigitPosition::bins`] and sum to 1
//!   within 1e-9.
//! - All probabilities lie strictly in (0, 1).
//!
//! Conventions
//! -----------
//! - Bins are stored as `u8` digits next to the probabilities so callers can
//!   zip them without recomputing the layout.
use crate::digits::position::DigitPosition;
use std::sync::OnceLock;

/// BenfordTable — expected probabilities for one digit position.
///
/// Fields
/// ------
/// - `position`: [`DigitPosition`] the table describes.
/// - `bins`: digits in ascending order (1..=9 or 0..=9).
/// - `probabilities`: P(digit) for each entry of `bins`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenfordTable {
    pub position: DigitPosition,
    pub bins: Vec<u8>,
    pub probabilities: Vec<f64>,
}

impl BenfordTable {
    fn compute(position: DigitPosition) -> Self {
        let bins: Vec<u8> = position.bins().collect();
        let probabilities = bins
            .iter()
            .map(|&d| match position {
                DigitPosition::First => first_digit_probability(d),
                DigitPosition::Second => second_digit_probability(d),
            })
            .collect();
        BenfordTable { position, bins, probabilities }
    }

    /// Expected counts `P(d) · n` for a sample of `n` extracted digits.
    pub fn expected_counts(&self, n: usize) -> Vec<f64> {
        self.probabilities.iter().map(|p| p * n as f64).collect()
    }
}

#[inline]
fn first_digit_probability(d: u8) -> f64 {
    (1.0 + 1.0 / d as f64).log10()
}

#[inline]
fn second_digit_probability(d: u8) -> f64 {
    (1..=9u32).map(|k| (1.0 + 1.0 / (10 * k + d as u32) as f64).log10()).sum()
}

static FIRST_DIGIT: OnceLock<BenfordTable> = OnceLock::new();
static SECOND_DIGIT: OnceLock<BenfordTable> = OnceLock::new();

/// Benford table for `position`, computed on first use.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::digits::{DigitPosition, expected_probabilities};
///
/// let table = expected_probabilities(DigitPosition::First);
/// assert_eq!(table.bins.first(), Some(&1));
/// assert!((table.probabilities[0] - 0.30103).abs() < 1e-5);
/// ```
pub fn expected_probabilities(position: DigitPosition) -> &'static BenfordTable {
    match position {
        DigitPosition::First => FIRST_DIGIT.get_or_init(|| BenfordTable::compute(position)),
        DigitPosition::Second => SECOND_DIGIT.get_or_init(|| BenfordTable::compute(position)),
    }
}
