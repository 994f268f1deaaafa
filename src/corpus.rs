//! corpus — validated numeric corpus with original positions.
//!
//! Purpose
//! -------
//! Hold the ordered values analysed by the Benford tests together with each
//! value's position in the sequence it came from, so that anomalous index
//! ranges can be mapped back to source rows or lines.
//!
//! Key behaviors
//! -------------
//! - [`NumericCorpus::new`] / [`NumericCorpus::from_vec`] validate finiteness
//!   and assign positions `0..n`.
//! - [`NumericCorpus::with_positions`] accepts explicit original positions
//!   (e.g. row numbers that survived upstream filtering).
//! - [`NumericCorpus::filter`] drops values while keeping the surviving
//!   values' original positions.
//! - [`NumericCorpus::from_text`] runs a [`NumberExtractor`] first.
//!
//! Invariants & assumptions
//! ------------------------
//! - All values are finite.
//! - `positions.len() == values.len()` and positions are strictly increasing.
//! - Values are stored contiguously, so [`NumericCorpus::as_slice`] never
//!   fails.
//! - Zero values are allowed; they carry no significant digit and are
//!   ignored by the fit test.
//!
//! Conventions
//! -----------
//! - "Index" means an offset into this corpus; "position" means the original
//!   location reported back to callers.
use crate::extraction::NumberExtractor;
use crate::statistical_tests::errors::{BenfordError, BenfordResult};
use ndarray::{Array1, ArrayView1};
use serde::Serialize;

/// NumericCorpus — ordered finite values with their original positions.
///
/// Fields
/// ------
/// - `values`: `Array1<f64>`, finite, contiguous.
/// - `positions`: `Vec<usize>`, strictly increasing, same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericCorpus {
    values: Array1<f64>,
    positions: Vec<usize>,
}

impl NumericCorpus {
    /// Build a corpus whose positions are `0..values.len()`.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::NonFiniteValue { index, value }` for the first NaN or
    ///   ±∞ entry.
    pub fn new(values: Array1<f64>) -> BenfordResult<Self> {
        let positions = (0..values.len()).collect();
        Self::with_positions(values, positions)
    }

    pub fn from_vec(values: Vec<f64>) -> BenfordResult<Self> {
        Self::new(Array1::from(values))
    }

    /// Build a corpus with explicit original positions.
    ///
    /// Errors
    /// ------
    /// - `BenfordError::PositionLengthMismatch` when lengths differ.
    /// - `BenfordError::NonFiniteValue` for the first non-finite value.
    /// - `BenfordError::NonIncreasingPosition { index }` when
    ///   `positions[index] <= positions[index - 1]`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use ndarray::array;
    /// use rust_benford::corpus::NumericCorpus;
    ///
    /// let corpus = NumericCorpus::with_positions(array![120.5, 88.0], vec![3, 9]).unwrap();
    /// assert_eq!(corpus.positions(), &[3, 9]);
    /// ```
    pub fn with_positions(values: Array1<f64>, positions: Vec<usize>) -> BenfordResult<Self> {
        if values.len() != positions.len() {
            return Err(BenfordError::PositionLengthMismatch {
                values: values.len(),
                positions: positions.len(),
            });
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(BenfordError::NonFiniteValue { index, value });
            }
        }

        if let Some(index) = positions.windows(2).position(|w| w[1] <= w[0]) {
            return Err(BenfordError::NonIncreasingPosition { index: index + 1 });
        }

        let values = values.as_standard_layout().into_owned();
        Ok(NumericCorpus { values, positions })
    }

    /// Extract values from `text` and index them by extraction order.
    pub fn from_text(text: &str, extractor: &NumberExtractor) -> BenfordResult<Self> {
        Self::from_vec(extractor.extract(text))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice().expect("corpus values are stored in standard layout")
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Keep the values for which `keep` returns true, preserving their
    /// original positions.
    pub fn filter<F>(&self, mut keep: F) -> NumericCorpus
    where
        F: FnMut(f64) -> bool,
    {
        let (values, positions): (Vec<f64>, Vec<usize>) = self
            .values
            .iter()
            .zip(&self.positions)
            .filter(|&(&v, _)| keep(v))
            .map(|(&v, &p)| (v, p))
            .unzip();
        NumericCorpus { values: Array1::from(values), positions }
    }

    /// Drop exact zeros, which have no significant digit.
    pub fn without_zeros(&self) -> NumericCorpus {
        self.filter(|v| v != 0.0)
    }
}
