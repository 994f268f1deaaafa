//! utils — conversion helpers for the PyO3 binding layer.
//!
//! Everything here is compiled only with the `python-bindings` feature; the
//! helpers turn Python arguments into validated Rust values and leave all
//! statistics to the core modules.
#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::{corpus::NumericCorpus, digits::DigitPosition, localization::LocalizerOptions};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Build a [`NumericCorpus`] from the data handed to `BenfordTest` or
/// `AnomalyLocalizer`.
///
/// Accepted inputs
/// ---------------
/// - A contiguous 1-D `float64` numpy array.
/// - A pandas Series of amounts (converted through `to_numpy`).
/// - Any Python sequence of floats, e.g. the list returned by
///   `extract_numbers`.
///
/// `positions` are the original row numbers of the values; without them the
/// corpus is numbered from 0.
///
/// Errors
/// ------
/// - `TypeError` when the data is none of the above.
/// - `ValueError` for non-finite values or invalid positions.
#[cfg(feature = "python-bindings")]
pub fn extract_corpus<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, positions: Option<Vec<usize>>,
) -> PyResult<NumericCorpus> {
    let values = read_amounts(py, raw_data)?.as_array().to_owned();
    let corpus = match positions {
        Some(positions) => NumericCorpus::with_positions(values, positions)?,
        None => NumericCorpus::new(values)?,
    };
    Ok(corpus)
}

/// Contiguous read-only view over the amounts, copying only when the input
/// is neither a contiguous array nor a Series backed by one.
#[cfg(feature = "python-bindings")]
fn read_amounts<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Some(arr) = contiguous(raw_data) {
        return Ok(arr);
    }
    if let Some(arr) = raw_data.call_method0("to_numpy").ok().as_ref().and_then(contiguous) {
        return Ok(arr);
    }

    let amounts: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "amounts must be a 1-D float64 array, a pandas Series or a list of numbers",
        )
    })?;
    Ok(amounts.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
fn contiguous<'py>(candidate: &Bound<'py, PyAny>) -> Option<PyReadonlyArray1<'py, f64>> {
    candidate.extract::<PyReadonlyArray1<'py, f64>>().ok().filter(|arr| arr.as_slice().is_ok())
}

/// Parse the required `"first"`/`"second"` (or `"1"`/`"2"`) argument.
#[cfg(feature = "python-bindings")]
pub fn extract_digit_position(position: &str) -> PyResult<DigitPosition> {
    position.parse::<DigitPosition>().map_err(PyValueError::new_err)
}

#[cfg(feature = "python-bindings")]
pub fn build_localizer_options(
    position: &str, significance: Option<f64>, max_depth: Option<usize>,
    min_range_len: Option<usize>, max_regions: Option<usize>,
) -> PyResult<LocalizerOptions> {
    let defaults = LocalizerOptions::default();
    let opts = LocalizerOptions::new(
        significance.unwrap_or(defaults.significance()),
        max_depth.unwrap_or(defaults.max_depth()),
        extract_digit_position(position)?,
        min_range_len.unwrap_or(defaults.min_range_len()),
        max_regions.unwrap_or(defaults.max_regions()),
    )?;
    Ok(opts)
}
