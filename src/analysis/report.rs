//! analysis::report — structured outcome of one analysis request.
use crate::localization::{AnomalyRegion, LocalizationDiagnostic};
use crate::statistical_tests::goodness_of_fit::FitResult;
use serde::{Deserialize, Serialize};

/// Whole-corpus verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Digits are consistent with Benford's Law at the requested level.
    Normal,
    /// The whole-corpus test rejected Benford's Law.
    Anomalous,
}

/// AnalysisReport — whole-corpus fit plus, when anomalous, localized regions.
///
/// Fields
/// ------
/// - `verdict`: [`Verdict::Anomalous`] iff `fit.anomalous()`.
/// - `fit`: strict whole-corpus [`FitResult`].
/// - `regions`: ranked [`AnomalyRegion`]s; empty for a normal verdict.
/// - `diagnostics`: sub-ranges the localizer had to skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub verdict: Verdict,
    pub fit: FitResult,
    pub regions: Vec<AnomalyRegion>,
    pub diagnostics: Vec<LocalizationDiagnostic>,
}

impl AnalysisReport {
    pub fn is_anomalous(&self) -> bool {
        self.verdict == Verdict::Anomalous
    }
}
