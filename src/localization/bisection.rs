//! localization::bisection — recursive search for anomalous sub-ranges.
//!
//! Purpose
//! -------
//! Narrow a whole-corpus Benford deviation down to the contiguous ranges
//! responsible for it, while keeping the family-wise false-positive rate
//! under control across the many tests the search runs.
//!
//! Key behaviors
//! -------------
//! - Test the whole corpus at depth 1 with the strict χ² fit test at the
//!   Bonferroni-corrected level α / (2^(max_depth+1) − 1).
//! - When a range is anomalous, record it and test both halves (split by
//!   count at `len / 2`) one level deeper; otherwise stop the branch.
//! - Ranges shorter than `min_range_len`, or deeper than `max_depth`, are
//!   never tested.
//! - A range whose strict test fails (expected count below 5, no digits) is
//!   skipped with a [`LocalizationDiagnostic::SkippedRange`] and a `warn!`
//!   event; sibling branches continue.
//! - Regions are ranked by ascending p-value (stable on ties) and truncated
//!   to `max_regions`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Termination follows from the depth bound alone; the size floor only
//!   prunes earlier.
//! - Reported `start`/`end` are original corpus positions, so filtering a
//!   corpus before localization does not shift the reported ranges.
//! - The same corrected level is used at every depth.
//!
//! Conventions
//! -----------
//! - Branches are explored left before right; diagnostics follow that order.
//!
//! Testing notes
//! -------------
//! - Unit tests here use small synthetic corpora with fixed digit layouts.
//!   Larger mixed corpora and truncation are exercised in
//!   `tests/integration_benford_pipeline.rs`.
use crate::corpus::NumericCorpus;
use crate::localization::options::LocalizerOptions;
use crate::localization::region::{AnomalyRegion, Localization, LocalizationDiagnostic};
use crate::statistical_tests::errors::BenfordResult;
use crate::statistical_tests::goodness_of_fit::FitResult;
use tracing::{debug, warn};

/// Localize the ranges of `corpus` that deviate from Benford's Law.
///
/// Parameters
/// ----------
/// - `corpus`: `&NumericCorpus`
///   Ordered values with their original positions.
/// - `options`: `&LocalizerOptions`
///   Nominal significance, depth bound, digit position, size floor and
///   number of reported regions.
///
/// Returns
/// -------
/// `BenfordResult<Localization>`
///   Ranked regions, skip diagnostics, the corrected level and the number of
///   tests that produced a result.
///
/// Errors
/// ------
/// - Configuration errors from [`LocalizerOptions::validate`]. Errors of
///   individual range tests are never returned; they become diagnostics.
///
/// Examples
/// --------
/// ```rust
/// use rust_benford::corpus::NumericCorpus;
/// use rust_benford::localization::{LocalizerOptions, localize};
///
/// // Too short to be evaluated at all.
/// let corpus = NumericCorpus::from_vec(vec![123.0, 456.0, 789.0]).unwrap();
/// let found = localize(&corpus, &LocalizerOptions::default()).unwrap();
/// assert!(found.regions.is_empty());
/// assert_eq!(found.tests_run, 0);
/// ```
pub fn localize(corpus: &NumericCorpus, options: &LocalizerOptions) -> BenfordResult<Localization> {
    options.validate()?;

    let mut search = Bisection {
        options,
        corrected_significance: options.corrected_significance(),
        regions: Vec::new(),
        diagnostics: Vec::new(),
        tests_run: 0,
    };
    search.visit(corpus.as_slice(), corpus.positions(), 1);

    let Bisection { corrected_significance, mut regions, diagnostics, tests_run, .. } = search;
    let found = regions.len();
    regions.sort_by(|a, b| a.p_value.total_cmp(&b.p_value));
    regions.truncate(options.max_regions());

    debug!(
        corpus_len = corpus.len(),
        corrected_significance,
        tests_run,
        found,
        reported = regions.len(),
        skipped = diagnostics.len(),
        "localization finished"
    );

    Ok(Localization { regions, diagnostics, corrected_significance, tests_run })
}

/// Mutable state of one search; lives only for a single `localize` call.
struct Bisection<'a> {
    options: &'a LocalizerOptions,
    corrected_significance: f64,
    regions: Vec<AnomalyRegion>,
    diagnostics: Vec<LocalizationDiagnostic>,
    tests_run: usize,
}

impl Bisection<'_> {
    fn visit(&mut self, values: &[f64], positions: &[usize], depth: usize) {
        if depth > self.options.max_depth()
            || values.is_empty()
            || values.len() < self.options.min_range_len()
        {
            return;
        }
        let (start, end) = (positions[0], positions[positions.len() - 1]);

        let fit = match FitResult::benford_test_strict(
            values,
            self.options.digit_position(),
            self.corrected_significance,
        ) {
            Ok(fit) => fit,
            Err(reason) => {
                warn!(start, end, depth, %reason, "skipping range");
                self.diagnostics.push(LocalizationDiagnostic::SkippedRange {
                    start,
                    end,
                    depth,
                    reason,
                });
                return;
            }
        };
        self.tests_run += 1;

        if !fit.anomalous() {
            return;
        }
        debug!(start, end, depth, p_value = fit.p_value(), "anomalous range");
        self.regions.push(AnomalyRegion {
            start,
            end,
            len: values.len(),
            p_value: fit.p_value(),
            depth,
        });

        let mid = values.len() / 2;
        self.visit(&values[..mid], &positions[..mid], depth + 1);
        self.visit(&values[mid..], &positions[mid..], depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::DigitPosition;
    use crate::localization::options::max_tests;
    use crate::statistical_tests::errors::BenfordError;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conforming corpora: one test, no regions.
    // - Uniform-digit corpora: recursion, depth bound, size floor.
    // - Skip diagnostics for sub-ranges failing the expected-count floor.
    // - Position mapping through a filtered corpus.
    // - Configuration errors, including depths too large to count.
    // - Region and diagnostic invariants over random corpora and options.
    //
    // They intentionally DO NOT cover:
    // - Truncation and mixed corpora (see the integration tests).
    // -------------------------------------------------------------------------

    /// Benford-shaped first-digit counts per block of 100 values.
    const BENFORD_BLOCK: [usize; 9] = [30, 18, 12, 10, 8, 7, 6, 5, 4];

    /// `n` values whose leading digits follow `BENFORD_BLOCK`, repeated.
    fn benford_values(n: usize) -> Vec<f64> {
        let pattern: Vec<u8> = BENFORD_BLOCK
            .iter()
            .enumerate()
            .flat_map(|(slot, &count)| std::iter::repeat_n(slot as u8 + 1, count))
            .collect();
        (0..n).map(|i| value_with_leading_digit(pattern[i % pattern.len()], i)).collect()
    }

    /// `n` values whose leading digits cycle 1, 2, …, 9.
    fn uniform_values(n: usize) -> Vec<f64> {
        (0..n).map(|i| value_with_leading_digit((i % 9) as u8 + 1, i)).collect()
    }

    fn value_with_leading_digit(digit: u8, i: usize) -> f64 {
        (digit as f64 + (i % 89) as f64 / 100.0) * 10f64.powi((i % 4) as i32 + 1)
    }

    fn options(max_depth: usize, min_range_len: usize) -> LocalizerOptions {
        LocalizerOptions::new(0.05, max_depth, DigitPosition::First, min_range_len, 5)
            .expect("valid options")
    }

    #[test]
    // Purpose
    // -------
    // A Benford-shaped corpus is tested once and yields nothing.
    //
    // Given
    // -----
    // - 1_000 values built from exact Benford-shaped blocks.
    //
    // Expect
    // ------
    // - One test run, no regions, no diagnostics.
    fn conforming_corpus_stops_at_root() {
        let corpus = NumericCorpus::from_vec(benford_values(1_000)).expect("finite");

        let found = localize(&corpus, &options(3, 50)).expect("valid options");

        assert_eq!(found.tests_run, 1);
        assert!(found.regions.is_empty());
        assert!(found.diagnostics.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // A fully uniform corpus is anomalous at every level; the depth bound
    // stops the search.
    //
    // Given
    // -----
    // - 900 uniform leading digits, max_depth 2.
    //
    // Expect
    // ------
    // - Regions at depth 1 (whole corpus) and depth 2 (both halves).
    // - The whole corpus spans positions 0..=899; halves split at 450.
    fn uniform_corpus_recurses_to_max_depth() {
        let corpus = NumericCorpus::from_vec(uniform_values(900)).expect("finite");

        let found = localize(&corpus, &options(2, 50)).expect("valid options");

        assert_eq!(found.tests_run, 3);
        assert_eq!(found.regions.len(), 3);
        assert!(found.regions.iter().all(|r| r.depth <= 2));
        assert!(found.regions.windows(2).all(|w| w[0].p_value <= w[1].p_value));

        let mut spans: Vec<(usize, usize, usize)> =
            found.regions.iter().map(|r| (r.start, r.end, r.depth)).collect();
        spans.sort_unstable();
        assert_eq!(spans, vec![(0, 449, 2), (0, 899, 1), (450, 899, 2)]);
        assert!((found.corrected_significance - 0.05 / 7.0).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Ranges below the size floor are never evaluated.
    //
    // Given
    // -----
    // - 900 uniform values, max_depth 4, min_range_len 300.
    //
    // Expect
    // ------
    // - Only the root and its two halves (450 each) are tested; quarters
    //   (225) are below the floor and leave no diagnostic.
    fn size_floor_prunes_without_diagnostics() {
        let corpus = NumericCorpus::from_vec(uniform_values(900)).expect("finite");

        let found = localize(&corpus, &options(4, 300)).expect("valid options");

        assert_eq!(found.tests_run, 3);
        assert!(found.regions.iter().all(|r| r.len >= 300));
        assert!(found.diagnostics.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Sub-ranges that violate the expected-count floor are skipped with a
    // diagnostic instead of aborting the search.
    //
    // Given
    // -----
    // - 160 uniform values, max_depth 2, min_range_len 50.
    // - Halves hold 80 values: expected counts for digits 8 and 9 are about
    //   4.1 and 3.7.
    //
    // Expect
    // ------
    // - The root is reported; both halves are skipped with
    //   `ExpectedCountTooLow` diagnostics in left-to-right order.
    fn low_expected_count_subranges_are_skipped() {
        let corpus = NumericCorpus::from_vec(uniform_values(160)).expect("finite");

        let found = localize(&corpus, &options(2, 50)).expect("valid options");

        assert_eq!(found.tests_run, 1);
        assert_eq!(found.regions.len(), 1);
        assert_eq!((found.regions[0].start, found.regions[0].end), (0, 159));
        assert_eq!(found.diagnostics.len(), 2);

        let spans: Vec<(usize, usize)> = found
            .diagnostics
            .iter()
            .map(|d| match d {
                LocalizationDiagnostic::SkippedRange { start, end, depth, reason } => {
                    assert_eq!(*depth, 2);
                    assert!(matches!(reason, BenfordError::ExpectedCountTooLow { .. }));
                    (*start, *end)
                }
            })
            .collect();
        assert_eq!(spans, vec![(0, 79), (80, 159)]);
    }

    #[test]
    // Purpose
    // -------
    // Regions report original positions, not offsets into the filtered corpus.
    //
    // Given
    // -----
    // - 900 uniform values interleaved with zeros at every other position,
    //   then zeros dropped.
    //
    // Expect
    // ------
    // - The root region spans the original positions 1..=1799.
    fn regions_report_original_positions() {
        let raw: Vec<f64> =
            uniform_values(900).into_iter().flat_map(|v| [0.0, v]).collect();
        let corpus = NumericCorpus::from_vec(raw).expect("finite").without_zeros();

        let found = localize(&corpus, &options(1, 50)).expect("valid options");

        assert_eq!(found.regions.len(), 1);
        assert_eq!((found.regions[0].start, found.regions[0].end), (1, 1_799));
    }

    #[test]
    // Purpose
    // -------
    // Options that bypassed `LocalizerOptions::new` (e.g. deserialized) are
    // still rejected before any test runs.
    fn invalid_options_are_rejected_before_searching() {
        let corpus = NumericCorpus::from_vec(uniform_values(900)).expect("finite");
        let raw = r#"{"significance":0.05,"max_depth":0,"digit_position":"First",
                      "min_range_len":50,"max_regions":5}"#;
        let bad: LocalizerOptions = serde_json::from_str(raw).expect("well-formed json");

        assert_eq!(localize(&corpus, &bad), Err(BenfordError::InvalidMaxDepth(0)));
    }

    #[test]
    // Purpose
    // -------
    // A deserialized depth of `usize::MAX` is a configuration error rather
    // than an overflow while sizing the correction.
    fn unbounded_depth_is_rejected_before_searching() {
        let corpus = NumericCorpus::from_vec(uniform_values(900)).expect("finite");
        let raw = format!(
            r#"{{"significance":0.05,"max_depth":{},"digit_position":"First",
                 "min_range_len":50,"max_regions":5}}"#,
            usize::MAX
        );
        let bad: LocalizerOptions = serde_json::from_str(&raw).expect("well-formed json");

        assert_eq!(localize(&corpus, &bad), Err(BenfordError::InvalidMaxDepth(usize::MAX)));
    }

    fn any_position() -> impl Strategy<Value = DigitPosition> {
        prop_oneof![Just(DigitPosition::First), Just(DigitPosition::Second)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Whatever the data and configuration, every reported region and
        // every skipped range lies inside the corpus, respects the depth
        // bound and spans at least the size floor; the report is ranked,
        // truncated and clears the corrected level.
        #[test]
        fn regions_and_diagnostics_respect_search_bounds(
            values in prop::collection::vec(1.0f64..1.0e6, 0..1_200),
            max_depth in 1usize..=5,
            min_range_len in 50usize..300,
            max_regions in 1usize..8,
            position in any_position(),
        ) {
            let n = values.len();
            let corpus = NumericCorpus::from_vec(values).expect("finite");
            let opts = LocalizerOptions::new(0.05, max_depth, position, min_range_len, max_regions)
                .expect("valid options");

            let found = localize(&corpus, &opts).expect("valid options");

            prop_assert!(found.regions.len() <= max_regions);
            prop_assert!(found.tests_run <= max_tests(max_depth));
            prop_assert!(found.regions.windows(2).all(|w| w[0].p_value <= w[1].p_value));
            for r in &found.regions {
                prop_assert!(r.start <= r.end && r.end < n, "{r:?} outside 0..{n}");
                prop_assert!((1..=max_depth).contains(&r.depth));
                prop_assert!(r.len >= min_range_len);
                prop_assert_eq!(r.end - r.start + 1, r.len);
                prop_assert!(r.p_value < found.corrected_significance);
            }
            for d in &found.diagnostics {
                let LocalizationDiagnostic::SkippedRange { start, end, depth, .. } = d;
                prop_assert!(start <= end && *end < n, "{d:?} outside 0..{n}");
                prop_assert!((1..=max_depth).contains(depth));
                prop_assert!(end - start + 1 >= min_range_len);
            }
        }
    }
}
