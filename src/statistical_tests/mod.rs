//! statistical_tests — Benford goodness-of-fit testing and shared guards.
//!
//! Purpose
//! -------
//! Collect the χ² Benford conformity test and its shared infrastructure:
//! input/configuration validation and the crate-wide error type.
//!
//! Key behaviors
//! -------------
//! - Expose the goodness-of-fit test via [`FitResult`] and its constructors
//!   [`FitResult::benford_test`] (permissive) and
//!   [`FitResult::benford_test_strict`] (strict).
//! - Centralize guards in [`validation`] (significance level, depth bound,
//!   expected-count floor).
//! - Provide [`BenfordError`] and [`BenfordResult`] for the whole crate, plus
//!   a conversion to Python exceptions when `python-bindings` is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Test routines never panic on user-facing invalid input; every failure
//!   is a [`BenfordError`].
//! - Low expected counts are never silently trusted: they are either a
//!   [`FitDiagnostic`] on the result or a hard error, depending on the entry
//!   point.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_benford::digits::DigitPosition;
//!   use rust_benford::statistical_tests::{BenfordResult, FitResult};
//!
//!   fn check(values: &[f64]) -> BenfordResult<bool> {
//!       Ok(FitResult::benford_test_strict(values, DigitPosition::First, 0.05)?.anomalous())
//!   }
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests; end-to-end behavior is
//!   covered by the integration tests under `tests/`.

pub mod errors;
pub mod goodness_of_fit;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{BenfordError, BenfordResult};
pub use self::goodness_of_fit::{FitDiagnostic, FitResult, ValidationMode};
pub use self::validation::{MIN_EXPECTED_COUNT, validate_significance};

pub mod prelude {
    pub use super::errors::{BenfordError, BenfordResult};
    pub use super::goodness_of_fit::{FitDiagnostic, FitResult};
}
