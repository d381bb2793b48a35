//! Classification metrics.

use crate::classification::Label;
use crate::error::{Result, SentimentError};

/// Compute classification accuracy as a percentage.
///
/// accuracy = 100 · `correct_predictions` / `total_predictions`
///
/// # Errors
///
/// - `LengthMismatch` if the slices differ in length
/// - `EmptyTestSet` if there is nothing to score (accuracy would be NaN)
///
/// # Examples
///
/// ```
/// use aprender_sentiment::classification::Label;
/// use aprender_sentiment::metrics::accuracy_percent;
///
/// let y_true = [Label::Positive, Label::Negative, Label::Positive, Label::Negative];
/// let y_pred = [Label::Positive, Label::Negative, Label::Negative, Label::Negative];
/// assert_eq!(accuracy_percent(&y_pred, &y_true).expect("non-empty"), 75.0);
/// ```
pub fn accuracy_percent(y_pred: &[Label], y_true: &[Label]) -> Result<f64> {
    if y_pred.len() != y_true.len() {
        return Err(SentimentError::length_mismatch(
            "predictions",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(SentimentError::EmptyTestSet { fold: 0 });
    }

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(100.0 * correct as f64 / y_true.len() as f64)
}
