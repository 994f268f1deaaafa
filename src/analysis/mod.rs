//! analysis — end-to-end Benford conformity analysis of one corpus.
//!
//! Purpose
//! -------
//! Tie the engine together the way a request handler uses it: validate the
//! configuration, enforce the sample-size policy, run the strict whole-corpus
//! fit test, and localize the deviation only when the corpus is anomalous.
//!
//! Key behaviors
//! -------------
//! - [`analyze`] returns an [`AnalysisReport`] with a [`Verdict`], the
//!   whole-corpus [`FitResult`] and, for anomalous corpora, ranked regions and
//!   skip diagnostics from [`localize`].
//! - [`analyze_text`] extracts values with the default [`NumberExtractor`]
//!   configuration first.
//!
//! Invariants & assumptions
//! ------------------------
//! - Configuration errors are reported before the sample-size check, and
//!   both before any statistics run.
//! - The whole-corpus test is strict: an expected count below 5 is a hard
//!   error here, unlike inside the localizer.
//! - Localization reuses the same significance, depth and digit position.
//!
//! Downstream usage
//! ----------------
//! - Presentation layers serialize the report with `serde`; region bounds are
//!   original corpus positions.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the policy ordering and both verdicts; mixed corpora
//!   live in `tests/integration_benford_pipeline.rs`.
//!
//! [`NumberExtractor`]: crate::extraction::NumberExtractor

pub mod options;
pub mod report;

pub use self::options::{AnalysisOptions, DEFAULT_MIN_SAMPLE_SIZE};
pub use self::report::{AnalysisReport, Verdict};

use crate::corpus::NumericCorpus;
use crate::extraction::extract_numbers;
use crate::localization::localize;
use crate::statistical_tests::errors::{BenfordError, BenfordResult};
use crate::statistical_tests::goodness_of_fit::FitResult;
use tracing::debug;

/// Analyse `corpus` for deviations from Benford's Law.
///
/// Parameters
/// ----------
/// - `corpus`: `&NumericCorpus`
///   Ordered values with original positions.
/// - `options`: `&AnalysisOptions`
///   Significance, depth bound, digit position and size policy.
///
/// Returns
/// -------
/// `BenfordResult<AnalysisReport>`
///   Verdict, whole-corpus fit and (when anomalous) localized regions.
///
/// Errors
/// ------
/// - Configuration errors from [`AnalysisOptions::validate`].
/// - `BenfordError::InsufficientData` when `corpus.len() < min_sample_size`.
/// - `BenfordError::NoExtractableDigits` / `ExpectedCountTooLow` from the
///   strict whole-corpus test.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::analysis::{AnalysisOptions, Verdict, analyze};
/// use rust_benford::corpus::NumericCorpus;
///
/// let values: Vec<f64> = (0..900).map(|i| ((i % 9) + 1) as f64 * 100.0 + 0.25).collect();
/// let corpus = NumericCorpus::from_vec(values).unwrap();
/// let report = analyze(&corpus, &AnalysisOptions::default()).unwrap();
/// assert_eq!(report.verdict, Verdict::Anomalous);
/// assert!(!report.regions.is_empty());
/// ```
pub fn analyze(corpus: &NumericCorpus, options: &AnalysisOptions) -> BenfordResult<AnalysisReport> {
    let localizer_options = options.localizer_options()?;

    if corpus.len() < options.min_sample_size() {
        return Err(BenfordError::InsufficientData {
            required: options.min_sample_size(),
            actual: corpus.len(),
        });
    }

    let fit = FitResult::benford_test_strict(
        corpus.as_slice(),
        options.digit_position(),
        options.significance(),
    )?;

    if !fit.anomalous() {
        debug!(corpus_len = corpus.len(), p_value = fit.p_value(), "corpus conforms");
        return Ok(AnalysisReport {
            verdict: Verdict::Normal,
            fit,
            regions: Vec::new(),
            diagnostics: Vec::new(),
        });
    }

    let localization = localize(corpus, &localizer_options)?;
    debug!(
        corpus_len = corpus.len(),
        p_value = fit.p_value(),
        regions = localization.regions.len(),
        "corpus anomalous"
    );

    Ok(AnalysisReport {
        verdict: Verdict::Anomalous,
        fit,
        regions: localization.regions,
        diagnostics: localization.diagnostics,
    })
}

/// Extract values from `text` with the default extractor, then [`analyze`].
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> BenfordResult<AnalysisReport> {
    let corpus = NumericCorpus::from_vec(extract_numbers(text))?;
    analyze(&corpus, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::DigitPosition;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Ordering of configuration vs. sample-size errors.
    // - Normal and anomalous verdicts, including when localization runs.
    // - Text entry point through the default extractor.
    // -------------------------------------------------------------------------

    /// Leading digit `digit`, three integer digits and a fractional part so
    /// no extractor filter applies.
    fn value_with_leading_digit(digit: usize, i: usize) -> f64 {
        (digit * 100 + i % 89) as f64 + 0.25
    }

    fn uniform_values(n: usize) -> Vec<f64> {
        (0..n).map(|i| value_with_leading_digit(i % 9 + 1, i)).collect()
    }

    fn benford_values(n: usize) -> Vec<f64> {
        let block = [30usize, 18, 12, 10, 8, 7, 6, 5, 4];
        let pattern: Vec<usize> = block
            .iter()
            .enumerate()
            .flat_map(|(slot, &count)| std::iter::repeat_n(slot + 1, count))
            .collect();
        (0..n).map(|i| value_with_leading_digit(pattern[i % pattern.len()], i)).collect()
    }

    #[test]
    // Purpose
    // -------
    // Small corpora are rejected with the policy threshold and actual size.
    fn short_corpus_is_insufficient() {
        let corpus = NumericCorpus::from_vec(uniform_values(299)).expect("finite");

        let result = analyze(&corpus, &AnalysisOptions::default());

        assert_eq!(result, Err(BenfordError::InsufficientData { required: 300, actual: 299 }));
    }

    #[test]
    // Purpose
    // -------
    // Configuration errors win over the sample-size check.
    //
    // Given
    // -----
    // - A 10-value corpus and deserialized options with α = 1.5.
    //
    // Expect
    // ------
    // - `InvalidSignificanceLevel(1.5)`, not `InsufficientData`.
    fn invalid_configuration_is_reported_first() {
        let corpus = NumericCorpus::from_vec(uniform_values(10)).expect("finite");
        let raw = r#"{"significance":1.5,"max_depth":3,"digit_position":"First",
                      "min_sample_size":300,"min_range_len":50,"max_regions":5}"#;
        let options: AnalysisOptions = serde_json::from_str(raw).expect("well-formed json");

        assert_eq!(analyze(&corpus, &options), Err(BenfordError::InvalidSignificanceLevel(1.5)));
    }

    #[test]
    fn conforming_corpus_is_normal_without_regions() {
        let corpus = NumericCorpus::from_vec(benford_values(1_000)).expect("finite");

        let report = analyze(&corpus, &AnalysisOptions::default()).expect("analysis runs");

        assert_eq!(report.verdict, Verdict::Normal);
        assert!(!report.is_anomalous());
        assert_eq!(report.fit.sample_size(), 1_000);
        assert!(report.regions.is_empty());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // An anomalous corpus is localized with the same configuration.
    //
    // Given
    // -----
    // - 900 uniform leading digits, max_depth 2.
    //
    // Expect
    // ------
    // - Verdict `Anomalous`; regions ranked by p-value, none deeper than 2,
    //   and the whole corpus (0..=899) among them.
    fn anomalous_corpus_is_localized() {
        let corpus = NumericCorpus::from_vec(uniform_values(900)).expect("finite");
        let options = AnalysisOptions::new(0.05, 2, DigitPosition::First).expect("valid");

        let report = analyze(&corpus, &options).expect("analysis runs");

        assert_eq!(report.verdict, Verdict::Anomalous);
        assert_eq!(report.regions.len(), 3);
        assert!(report.regions.iter().all(|r| r.depth <= 2));
        assert!(report.regions.windows(2).all(|w| w[0].p_value <= w[1].p_value));
        assert!(report.regions.iter().any(|r| (r.start, r.end) == (0, 899)));
    }

    #[test]
    fn analyze_text_runs_the_default_extractor() {
        let text: String =
            uniform_values(450).iter().map(|v| format!("Line total {v:.2}\n")).collect();

        let report = analyze_text(&text, &AnalysisOptions::default()).expect("analysis runs");

        assert_eq!(report.fit.sample_size(), 450);
        assert_eq!(report.verdict, Verdict::Anomalous);
    }
}
