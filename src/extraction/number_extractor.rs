//! extraction::number_extractor — free-form text to candidate values.
//!
//! Purpose
//! -------
//! Turn text produced by document parsers (PDF pages, plain-text exports)
//! into the ordered sequence of numbers that forms a Benford corpus,
//! discarding tokens that are unlikely to be naturally occurring amounts.
//!
//! Key behaviors
//! -------------
//! - Drop whole lines that mention a metadata keyword (see
//!   [`ExtractorOptions::keywords`]).
//! - Scan the remaining lines for numeric tokens, preferring, in order:
//!   comma-grouped integers with an optional fraction (`1,234,567.89`),
//!   ungrouped decimals (`1234.5`, `.75`), and plain integers; each may carry
//!   a leading sign.
//! - Strip grouping commas, parse as `f64`, silently drop unparsable
//!   fragments, then apply [`ExtractorOptions::retains`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Output order is encounter order; localization indexes into exactly this
//!   order, so the extractor never sorts or deduplicates.
//! - Retained values are finite and have magnitude ≥ 1 with default options.
//! - Feeding retained values back as text (one `Display`-formatted value per
//!   line) reproduces them unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference statement snippet, token priority,
//!   signs and grouping, keyword matching, and an idempotence property.
use crate::extraction::options::ExtractorOptions;
use crate::statistical_tests::errors::{BenfordError, BenfordResult};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;
use tracing::debug;

const TOKEN_PATTERN: &str = r"[-+]?(?:\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d*\.\d+|\d+)";

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

/// NumberExtractor — configured text scanner.
///
/// Construct once with [`NumberExtractor::new`] and reuse; the keyword filter
/// is compiled at construction time.
#[derive(Debug, Clone)]
pub struct NumberExtractor {
    options: ExtractorOptions,
    line_filter: Option<Regex>,
}

impl NumberExtractor {
    /// Build an extractor from `options`.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::InvalidKeywordFilter`
    ///   The escaped keyword alternation exceeds the regex size limits.
    pub fn new(options: ExtractorOptions) -> BenfordResult<Self> {
        let keywords: Vec<String> =
            options.keywords.iter().filter(|k| !k.is_empty()).map(|k| regex::escape(k)).collect();

        let line_filter = if keywords.is_empty() {
            None
        } else {
            let pattern = format!("(?:{})", keywords.join("|"));
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| BenfordError::InvalidKeywordFilter(e.to_string()))?;
            Some(re)
        };

        Ok(NumberExtractor { options, line_filter })
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract retained numeric values from `text` in encounter order.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_benford::extraction::{ExtractorOptions, NumberExtractor};
    ///
    /// let extractor = NumberExtractor::new(ExtractorOptions::default()).unwrap();
    /// let text = "Revenue: $1,234,567.89\nPage numbers: 1, 2, 3\nCost: -845.10";
    /// assert_eq!(extractor.extract(text), vec![1_234_567.89, -845.10]);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<f64> {
        let mut dropped_lines = 0usize;
        let mut tokens = 0usize;
        let mut values = Vec::new();

        for line in text.lines() {
            if self.line_filter.as_ref().is_some_and(|re| re.is_match(line)) {
                dropped_lines += 1;
                continue;
            }

            for token in token_regex().find_iter(line) {
                tokens += 1;
                let cleaned = token.as_str().replace(',', "");
                let Ok(value) = cleaned.parse::<f64>() else {
                    continue;
                };
                if value.is_finite() && self.options.retains(value) {
                    values.push(value);
                }
            }
        }

        debug!(dropped_lines, tokens, retained = values.len(), "extracted numeric tokens");
        values
    }
}

/// Extract values from `text` with [`ExtractorOptions::default`].
pub fn extract_numbers(text: &str) -> Vec<f64> {
    static DEFAULT: OnceLock<NumberExtractor> = OnceLock::new();
    DEFAULT
        .get_or_init(|| {
            NumberExtractor::new(ExtractorOptions::default())
                .expect("default keywords compile to a valid filter")
        })
        .extract(text)
}
