//! digits — significant-digit extraction and Benford expectations.
//!
//! Purpose
//! -------
//! Hold the two pure building blocks shared by every test in the crate:
//! reading the first/second significant digit of a value and the theoretical
//! Benford distribution for that position.
//!
//! Key behaviors
//! -------------
//! - [`first_digit`], [`second_digit`] and [`digit_at`] never panic and return
//!   `None` when a value has no digit at the requested position.
//! - [`expected_probabilities`] returns process-wide, read-only tables that
//!   are safe to share between threads.
//!
//! Downstream usage
//! ----------------
//! - `statistical_tests::goodness_of_fit` builds histograms with
//!   [`digit_at`] and expected counts with [`BenfordTable::expected_counts`].

pub mod expected;
pub mod extract;
pub mod position;

pub use self::expected::{BenfordTable, expected_probabilities};
pub use self::extract::{digit_at, first_digit, second_digit};
pub use self::position::DigitPosition;
