use logit_core::{check_shapes, hypothesis, Float, LogitError, Matrix, Predictions, Result, RowVector, Vector};
use tracing::debug;

use crate::gradient_descent::gradient_descent;

/// Binary **logistic regression** trained with batch gradient descent.
///
/// The model estimates the probability of the positive class as:
///
/// ```text
/// P(y = 1 | x) = σ(x θᵀ)
/// ```
///
/// where:
/// - `x` is a sample row of the design matrix, **bias column included**
///   (column 0 is the constant `1.0`)
/// - `θ` is a `(1 × (n + 1))` parameter row vector whose first entry is the
///   intercept
///
/// # Training objective
///
/// [`fit`](LogisticRegression::fit) starts from `θ = 0` and runs a fixed
/// number of gradient-descent iterations on the cross-entropy cost:
///
/// ```text
/// J(θ) = (1/m) Σ_i ( −y_i · ln(h_i) − (1 − y_i) · ln(1 − h_i) )
/// ```
///
/// No regularization and no early stopping: the iteration count is the
/// only stopping rule.
///
/// # Stored parameters
///
/// - `theta`: `Some(θ)` after a successful fit; `None` before fitting.
/// - `cost_history`: the cost after each iteration of the last fit.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if `X` has zero rows.
/// - [`LogitError::ShapeMismatch`] if `y.len() != X.nrows()` or prediction shapes mismatch.
/// - [`LogitError::InvalidTrainingData`] if a label is not `0.0` or `1.0`.
/// - [`LogitError::NotFitted`] if prediction is attempted before fit.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Learned parameters `θ`, intercept first.
    theta: Option<RowVector>,
    /// Cost after each gradient-descent iteration.
    cost_history: Vec<Float>,
    /// Step size `α`.
    learning_rate: Float,
    /// Number of gradient-descent iterations.
    iterations: usize,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self {
            theta: None,
            cost_history: Vec::new(),
            learning_rate: 0.01,
            iterations: 1000,
        }
    }
}

impl LogisticRegression {
    /// Creates a new, unfitted model.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let model = LogisticRegression::new(0.01, 400);
    /// ```
    pub fn new(learning_rate: Float, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            ..Self::default()
        }
    }

    /// Fits `θ` on design matrix `x` and binary labels `y`.
    ///
    /// # Parameters
    ///
    /// - `x`: Design matrix `(m, n + 1)`, bias column included.
    /// - `y`: Labels of length `m`, each `0.0` or `1.0`.
    ///
    /// # Errors
    ///
    /// - [`LogitError::EmptyTrainingData`] if `x.nrows() == 0`.
    /// - [`LogitError::ShapeMismatch`] if `y.len() != x.nrows()`.
    /// - [`LogitError::InvalidTrainingData`] if a label is outside `{0, 1}`.
    /// - [`LogitError::InvalidHyperparameter`] if the learning rate is invalid.
    /// - [`LogitError::NumericOverflow`] if training diverges.
    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        let theta = RowVector::zeros(x.ncols());
        check_shapes(x, y, &theta)?;

        if y.iter().any(|&label| label != 0.0 && label != 1.0) {
            return Err(LogitError::InvalidTrainingData);
        }

        let descent = gradient_descent(theta, x, y, self.learning_rate, self.iterations)?;

        debug!(
            theta = ?descent.theta.as_slice(),
            iterations = self.iterations,
            "logistic regression fitted"
        );

        self.theta = Some(descent.theta);
        self.cost_history = descent.costs;
        Ok(())
    }

    /// Predicts `P(y = 1 | x)` for every row of `x`.
    ///
    /// # Errors
    ///
    /// - [`LogitError::NotFitted`] if the model has not been trained.
    /// - [`LogitError::ShapeMismatch`] if `x.ncols() != θ.ncols()`.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
        let theta = self.theta.as_ref().ok_or(LogitError::NotFitted)?;
        hypothesis(x, theta)
    }

    /// Predicts class labels with a `0.5` decision threshold.
    pub fn predict(&self, x: &Matrix) -> Result<Predictions> {
        self.predict_with_threshold(x, 0.5)
    }

    /// Predicts class labels, labelling a row `1` when its probability is
    /// at least `threshold`.
    ///
    /// # Errors
    ///
    /// - [`LogitError::InvalidHyperparameter`] if `threshold` is outside `[0, 1]`.
    /// - Any error from [`predict_proba`](LogisticRegression::predict_proba).
    pub fn predict_with_threshold(&self, x: &Matrix, threshold: Float) -> Result<Predictions> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(LogitError::InvalidHyperparameter {
                name: "threshold".into(),
                value: threshold.to_string(),
            });
        }

        let proba = self.predict_proba(x)?;
        Ok(proba
            .iter()
            .map(|&p| if p >= threshold { 1 } else { 0 })
            .collect())
    }

    /// Returns the learned parameters, or `None` if not fitted.
    pub fn theta(&self) -> Option<&RowVector> {
        self.theta.as_ref()
    }

    /// Returns the cost after each iteration of the last fit.
    pub fn cost_history(&self) -> &[Float] {
        &self.cost_history
    }

    pub fn learning_rate(&self) -> Float {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
