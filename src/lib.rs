//! rust_benford — Benford's Law deviation detection and localization.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the Benford engine to Python via the `_rust_benford` extension module. The
//! engine turns a flat sequence of numbers into a whole-corpus goodness-of-fit
//! verdict and, for anomalous corpora, a ranked list of the contiguous ranges
//! responsible for the deviation.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: `digits` (digit extraction and Benford
//!   tables), `extraction` (numbers from text), `corpus` (validated values with
//!   original positions), `statistical_tests` (χ² fit test), `localization`
//!   (Bonferroni-corrected bisection) and `analysis` (the end-to-end pipeline).
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_benford` Python extension.
//! - Register the Python submodules (`statistical_tests`, `localization`)
//!   under `rust_benford` so dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All statistics live in the inner Rust modules; this file performs only
//!   FFI glue, input conversion and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts
//!   (`FitResult`, `Localization`).
//!
//! Conventions
//! -----------
//! - Region bounds are original corpus positions, inclusive on both ends.
//! - Errors from core code are [`statistical_tests::BenfordError`] values and
//!   become `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Rust callers usually start from [`analysis::analyze`] or
//!   [`analysis::analyze_text`]; lower-level pieces are public for custom
//!   pipelines.
//! - The Python package imports `_rust_benford` and wraps its classes.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_benford_pipeline.rs`.

pub mod analysis;
pub mod corpus;
pub mod digits;
pub mod extraction;
pub mod localization;
pub mod statistical_tests;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    localization::{Localization, LocalizationDiagnostic, localize},
    statistical_tests::{FitDiagnostic, FitResult, ValidationMode},
    utils::{build_localizer_options, extract_corpus, extract_digit_position},
};

/// BenfordTest — Python-facing wrapper for the χ² Benford fit test.
///
/// Purpose
/// -------
/// Run [`FitResult::run`] on Python array-like data and expose the outcome as
/// read-only properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `BenfordTest(data, position, significance=0.05, strict=False)`:
/// - `data`: one-dimensional array-like of finite floats.
/// - `position`: `"first"` or `"second"`; required.
/// - `significance`: level α in (0, 1).
/// - `strict`: raise `ValueError` instead of returning low-count diagnostics.
///
/// Fields
/// ------
/// - `inner`: [`FitResult`]
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_benford.statistical_tests")]
pub struct BenfordTest {
    inner: FitResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl BenfordTest {
    #[new]
    #[pyo3(
        text_signature = "(data, position, /, significance=0.05, strict=False)",
        signature = (raw_data, position, significance = 0.05, strict = false)
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, position: &str, significance: f64,
        strict: bool,
    ) -> PyResult<BenfordTest> {
        let corpus = extract_corpus(py, raw_data, None)?;
        let position = extract_digit_position(position)?;
        let mode = if strict { ValidationMode::Strict } else { ValidationMode::Permissive };
        let inner = FitResult::run(corpus.as_slice(), position, significance, mode)?;
        Ok(BenfordTest { inner })
    }

    /// χ² statistic.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    #[getter]
    pub fn degrees_of_freedom(&self) -> usize {
        self.inner.degrees_of_freedom()
    }

    #[getter]
    pub fn anomalous(&self) -> bool {
        self.inner.anomalous()
    }

    #[getter]
    pub fn sample_size(&self) -> usize {
        self.inner.sample_size()
    }

    #[getter]
    pub fn bins(&self) -> Vec<u8> {
        self.inner.bins().to_vec()
    }

    #[getter]
    pub fn observed(&self) -> Vec<u64> {
        self.inner.observed().to_vec()
    }

    #[getter]
    pub fn expected(&self) -> Vec<f64> {
        self.inner.expected().to_vec()
    }

    /// `(digit, expected_count)` for every bin below the χ² count floor.
    #[getter]
    pub fn low_expected_counts(&self) -> Vec<(u8, f64)> {
        self.inner
            .diagnostics()
            .iter()
            .map(|d| match d {
                FitDiagnostic::LowExpectedCount { digit, expected } => (*digit, *expected),
            })
            .collect()
    }
}

/// AnomalyLocalizer — Python-facing wrapper for the bisection localizer.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `AnomalyLocalizer(data, position, positions=None, significance=0.05,
/// max_depth=3, min_range_len=50, max_regions=5)`. `position` is `"first"` or
/// `"second"` and has no default. `positions` are the original row numbers of
/// `data` and must be strictly increasing. `min_range_len` cannot go below 50.
///
/// Fields
/// ------
/// - `inner`: [`Localization`]
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_benford.localization")]
pub struct AnomalyLocalizer {
    inner: Localization,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl AnomalyLocalizer {
    #[new]
    #[pyo3(
        text_signature = "(data, position, /, positions=None, significance=0.05, max_depth=3, \
                          min_range_len=50, max_regions=5)",
        signature = (
            raw_data,
            position,
            positions = None,
            significance = None,
            max_depth = None,
            min_range_len = None,
            max_regions = None,
        )
    )]
    pub fn new<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, position: &str,
        positions: Option<Vec<usize>>, significance: Option<f64>, max_depth: Option<usize>,
        min_range_len: Option<usize>, max_regions: Option<usize>,
    ) -> PyResult<AnomalyLocalizer> {
        let corpus = extract_corpus(py, raw_data, positions)?;
        let opts =
            build_localizer_options(position, significance, max_depth, min_range_len, max_regions)?;
        let inner = localize(&corpus, &opts)?;
        Ok(AnomalyLocalizer { inner })
    }

    /// `(start, end, p_value, depth)` per region, strongest evidence first.
    #[getter]
    pub fn regions(&self) -> Vec<(usize, usize, f64, usize)> {
        self.inner.regions.iter().map(|r| (r.start, r.end, r.p_value, r.depth)).collect()
    }

    /// `(start, end, depth, reason)` per skipped range.
    #[getter]
    pub fn skipped(&self) -> Vec<(usize, usize, usize, String)> {
        self.inner
            .diagnostics
            .iter()
            .map(|d| match d {
                LocalizationDiagnostic::SkippedRange { start, end, depth, reason } => {
                    (*start, *end, *depth, reason.to_string())
                }
            })
            .collect()
    }

    #[getter]
    pub fn corrected_significance(&self) -> f64 {
        self.inner.corrected_significance
    }

    #[getter]
    pub fn tests_run(&self) -> usize {
        self.inner.tests_run
    }
}

/// Numbers found in `text` by the default extractor, in encounter order.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "extract_numbers")]
fn py_extract_numbers(text: &str) -> Vec<f64> {
    extraction::extract_numbers(text)
}

/// _rust_benford — PyO3 module initializer for the Python extension.
///
/// Key behaviors
/// -------------
/// - Create the `statistical_tests` and `localization` submodules and attach
///   them to `_rust_benford`.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths.
/// - Expose `extract_numbers` at the top level.
///
/// Errors
/// ------
/// - `PyErr` if creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_benford<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    let localization_mod = PyModule::new(_py, "localization")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;
    localization(_py, m, &localization_mod)?;
    m.add_function(wrap_pyfunction!(py_extract_numbers, m)?)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_benford.statistical_tests", statistical_tests_mod)?;
    modules.set_item("rust_benford.localization", localization_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, rust_benford: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<BenfordTest>()?;
    rust_benford.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn localization<'py>(
    _py: Python, rust_benford: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<AnomalyLocalizer>()?;
    rust_benford.add_submodule(m)?;
    Ok(())
}
