use logit_core::{Float, LogitError, Predictions, Result, Vector};

/// Fraction of `predictions` that equal the corresponding label in `labels`.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if there is nothing to score.
/// - [`LogitError::ShapeMismatch`] if the lengths differ.
pub fn accuracy(predictions: &Predictions, labels: &Vector) -> Result<Float> {
    if labels.is_empty() {
        return Err(LogitError::EmptyTrainingData);
    }
    if predictions.len() != labels.len() {
        return Err(LogitError::ShapeMismatch {
            expected: format!("Expected {} predictions", labels.len()),
            got: format!("Got {}", predictions.len()),
        });
    }

    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(&p, &y)| p as Float == y)
        .count();

    Ok(correct as Float / labels.len() as Float)
}
