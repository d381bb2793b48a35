//! Cross-validation report rendering.

use crate::error::Result;
use crate::model_selection::{CrossValidationResult, FoldReport};
use serde::Serialize;

/// Per-fold line of the text report.
#[must_use]
pub fn fold_line(report: &FoldReport) -> String {
    format!("Fold {}: accuracy {:.2}%", report.fold, report.accuracy)
}

/// Closing line of the text report.
#[must_use]
pub fn summary_line(result: &CrossValidationResult) -> String {
    format!(
        "Mean accuracy {:.2}% (std {:.2}, min {:.2}%, max {:.2}%) over {} folds",
        result.mean(),
        result.std(),
        result.min(),
        result.max(),
        result.folds.len()
    )
}

#[derive(Serialize)]
struct Summary {
    mean: f64,
    std: f64,
    min: f64,
    max: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    folds: &'a [FoldReport],
    summary: Summary,
}

/// JSON report with every fold and the summary statistics.
///
/// Non-finite numbers (the log-prior of a class absent from training) are
/// written as `null`.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn to_json(result: &CrossValidationResult) -> Result<String> {
    let report = JsonReport {
        folds: &result.folds,
        summary: Summary {
            mean: result.mean(),
            std: result.std(),
            min: result.min(),
            max: result.max(),
        },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
