//! localization — ranking the sub-ranges responsible for a Benford deviation.
//!
//! Purpose
//! -------
//! Once a corpus as a whole fails the Benford fit test, find which contiguous
//! ranges of it carry the deviation, with a multiple-testing correction so
//! that repeated tests do not inflate false positives.
//!
//! Key behaviors
//! -------------
//! - [`localize`] runs a depth-bounded bisection with the strict fit test at
//!   α / (2^(max_depth+1) − 1) and returns a [`Localization`].
//! - [`LocalizerOptions`] carries the validated configuration.
//! - Sub-ranges that cannot be tested become
//!   [`LocalizationDiagnostic::SkippedRange`] entries rather than errors.
//!
//! Downstream usage
//! ----------------
//! - `analysis::analyze` calls [`localize`] only when the whole-corpus test is
//!   anomalous; callers may also run it directly on any corpus.

pub mod bisection;
pub mod options;
pub mod region;

pub use self::bisection::localize;
pub use self::options::{LocalizerOptions, corrected_significance, max_tests};
pub use self::region::{AnomalyRegion, Localization, LocalizationDiagnostic};
