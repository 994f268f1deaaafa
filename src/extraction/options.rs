//! extraction::options — knobs for turning free-form text into a corpus.
//!
//! Purpose
//! -------
//! Collect the line filter keywords and the semantic relevance thresholds
//! used by [`NumberExtractor`](crate::extraction::NumberExtractor) in one
//! place, with defaults tuned for financial statements.
//!
//! Key behaviors
//! -------------
//! - [`ExtractorOptions::default`] drops lines mentioning `page`, `date`,
//!   `year`, `id`, `number`, `no`, `report` or `annual`, and discards
//!   year-shaped integers, magnitudes below 1, and integers in [1, 50].
//! - [`ExtractorOptions::retains`] is the relevance filter applied to each
//!   parsed token.
//!
//! Invariants & assumptions
//! ------------------------
//! - Keywords are matched case-insensitively as substrings of a line, so
//!   `no` also drops lines such as "Notes".
//! - Year detection requires an exactly integral value; `2023.5` is data.
use serde::{Deserialize, Serialize};

/// Default metadata markers; a line containing any of them is skipped.
pub const DEFAULT_KEYWORDS: [&str; 8] =
    ["page", "date", "year", "id", "number", "no", "report", "annual"];

/// ExtractorOptions — configuration of the text-to-numbers scan.
///
/// Fields
/// ------
/// - `keywords`: metadata markers; lines containing one are dropped whole.
/// - `year_range`: inclusive magnitude range of integers treated as years.
/// - `min_magnitude`: values with |x| below this are noise/ratios.
/// - `max_small_integer`: integers with 1 ≤ |x| ≤ this are counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorOptions {
    pub keywords: Vec<String>,
    pub year_range: (f64, f64),
    pub min_magnitude: f64,
    pub max_small_integer: f64,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        ExtractorOptions {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            year_range: (1000.0, 9999.0),
            min_magnitude: 1.0,
            max_small_integer: 50.0,
        }
    }
}

impl ExtractorOptions {
    /// Whether `value` is kept as candidate data.
    ///
    /// Discards, in order: year-shaped integers, magnitudes below
    /// `min_magnitude`, and small integer counters/ordinals.
    pub fn retains(&self, value: f64) -> bool {
        let magnitude = value.abs();
        let is_integer = value.fract() == 0.0;
        let (year_lo, year_hi) = self.year_range;

        let is_year = is_integer && (year_lo..=year_hi).contains(&magnitude);
        let is_noise = magnitude < self.min_magnitude;
        let is_counter = is_integer && (1.0..=self.max_small_integer).contains(&magnitude);

        !(is_year || is_noise || is_counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Exercise every branch of the relevance filter with default options.
    //
    // Expect
    // ------
    // - Years, sub-1 magnitudes and small counters are dropped; decimals in
    //   the year range, integers just above 50, and large amounts are kept.
    fn retains_applies_year_noise_and_counter_rules() {
        let opts = ExtractorOptions::default();

        assert!(!opts.retains(2023.0));
        assert!(!opts.retains(-1999.0));
        assert!(!opts.retains(0.99));
        assert!(!opts.retains(0.0));
        assert!(!opts.retains(3.0));
        assert!(!opts.retains(50.0));

        assert!(opts.retains(2023.5));
        assert!(opts.retains(51.0));
        assert!(opts.retains(12.5));
        assert!(opts.retains(10_000.0));
        assert!(opts.retains(1_234_567.89));
    }

    #[test]
    fn default_keywords_cover_metadata_markers() {
        let opts = ExtractorOptions::default();

        assert_eq!(opts.keywords.len(), DEFAULT_KEYWORDS.len());
        assert!(opts.keywords.iter().any(|k| k == "annual"));
    }
}
