use crate::{check_shapes, hypothesis, Float, LogitError, Matrix, Result, RowVector, Vector};

/// Probabilities are clamped to `[ε, 1 − ε]` before taking logarithms.
pub const PROBABILITY_EPSILON: Float = 1e-15;

/// Computes the **binary cross-entropy** (mean negative log-likelihood) of
/// already computed probabilities `h` against binary labels `y`.
///
/// # Definition
///
/// ```text
/// J = (1/m) Σ_i ( −y_i · ln(h_i) − (1 − y_i) · ln(1 − h_i) )
/// ```
///
/// Each `h_i` is first clamped to `[ε, 1 − ε]` with
/// [`PROBABILITY_EPSILON`], so a saturated prediction contributes a large
/// but finite penalty instead of `inf`.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if `h` is empty.
/// - [`LogitError::ShapeMismatch`] if `h.len() != y.len()`.
/// - [`LogitError::InvalidValue`] if the cost is not finite (a `NaN` in
///   `h` or `y`).
pub fn log_loss(h: &Vector, y: &Vector) -> Result<Float> {
    let m = h.len();

    if m == 0 {
        return Err(LogitError::EmptyTrainingData);
    }
    if y.len() != m {
        return Err(LogitError::ShapeMismatch {
            expected: format!("Expected {} labels", m),
            got: format!("Got {}", y.len()),
        });
    }

    let total: Float = h
        .iter()
        .zip(y.iter())
        .map(|(&p, &label)| {
            let p = p.clamp(PROBABILITY_EPSILON, 1.0 - PROBABILITY_EPSILON);
            -label * p.ln() - (1.0 - label) * (1.0 - p).ln()
        })
        .sum();

    let cost = total / m as Float;

    if !cost.is_finite() {
        return Err(LogitError::InvalidValue {
            message: format!("Cost is not finite: {}", cost),
        });
    }

    Ok(cost)
}

/// Computes the logistic-regression cost `J(θ)` over the whole dataset.
///
/// ```text
/// h = σ(X θᵀ)
/// J = (1/m) Σ_i ( −y_i · ln(h_i) − (1 − y_i) · ln(1 − h_i) )
/// ```
///
/// # Parameters
///
/// - `x`: Design matrix `(m, n + 1)`, bias column included.
/// - `y`: Labels of length `m`, each `0.0` or `1.0`.
/// - `theta`: Parameter row vector of length `n + 1`.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if `x` has zero rows.
/// - [`LogitError::ShapeMismatch`] if `x`, `y` and `theta` disagree.
/// - [`LogitError::InvalidValue`] if the cost is not finite.
///
/// # Examples
///
/// ```rust
/// use logit_core::{compute_cost, Matrix, RowVector, Vector};
///
/// let x = Matrix::from_row_slice(2, 2, &[1.0, 3.0, 1.0, -1.0]);
/// let y = Vector::from_vec(vec![1.0, 0.0]);
/// let cost = compute_cost(&x, &y, &RowVector::zeros(2)).unwrap();
///
/// assert!((cost - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn compute_cost(x: &Matrix, y: &Vector, theta: &RowVector) -> Result<Float> {
    check_shapes(x, y, theta)?;
    let h = hypothesis(x, theta)?;
    log_loss(&h, y)
}
