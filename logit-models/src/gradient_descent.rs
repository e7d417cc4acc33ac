use logit_core::{check_shapes, compute_cost, hypothesis, Float, LogitError, Matrix, Result, RowVector, Vector};
use tracing::{debug, trace};

/// Result of a [`gradient_descent`] run.
///
/// - `theta`: parameters after the last iteration.
/// - `costs`: `costs[i]` is `J(θ)` evaluated right after iteration `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Descent {
    pub theta: RowVector,
    pub costs: Vec<Float>,
}

/// Performs a single **batch gradient-descent** update.
///
/// ```text
/// e  = σ(X θᵀ) − y
/// θ' = θ − (α / m) · (eᵀ X)
/// ```
///
/// `theta` is taken by value and the updated parameters are returned, so
/// the caller threads θ through iterations explicitly.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if `x` has zero rows.
/// - [`LogitError::ShapeMismatch`] if `x`, `y` and `theta` disagree.
pub fn step(theta: RowVector, x: &Matrix, y: &Vector, alpha: Float) -> Result<RowVector> {
    check_shapes(x, y, &theta)?;

    let m = x.nrows() as Float;
    let error = hypothesis(x, &theta)? - y;
    let gradient = error.transpose() * x;

    Ok(theta - gradient * (alpha / m))
}

/// Runs `iters` steps of **batch gradient descent** starting from `theta`.
///
/// After every [`step`] the cost `J(θ)` is evaluated with
/// [`compute_cost`] and appended to the cost trace, so the trace has
/// exactly `iters` entries and `costs[i]` is the cost after update `i + 1`.
///
/// # Parameters
///
/// - `theta`: Initial parameters, one per column of `x` (usually zeros).
/// - `x`: Design matrix `(m, n + 1)`, bias column included.
/// - `y`: Labels of length `m`.
/// - `alpha`: Learning rate, finite and strictly positive.
/// - `iters`: Number of updates. `0` returns `theta` unchanged with an
///   empty trace.
///
/// # Determinism
///
/// There is no randomness and the loop is strictly sequential: identical
/// inputs always produce bit-identical outputs.
///
/// # Errors
///
/// - [`LogitError::InvalidHyperparameter`] if `alpha` is not finite or `<= 0`.
/// - [`LogitError::EmptyTrainingData`] / [`LogitError::ShapeMismatch`] on
///   inconsistent inputs.
/// - [`LogitError::NumericOverflow`] if θ or the cost stops being finite.
///   There is no early stopping otherwise.
///
/// # Complexity
///
/// - Time: `O(iters · m · (n + 1))`
/// - Space: `O(m + iters)`
pub fn gradient_descent(
    theta: RowVector,
    x: &Matrix,
    y: &Vector,
    alpha: Float,
    iters: usize,
) -> Result<Descent> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(LogitError::InvalidHyperparameter {
            name: "alpha".into(),
            value: alpha.to_string(),
        });
    }
    check_shapes(x, y, &theta)?;

    debug!(
        samples = x.nrows(),
        parameters = x.ncols(),
        alpha,
        iters,
        "starting gradient descent"
    );

    let mut theta = theta;
    let mut costs = Vec::with_capacity(iters);

    for iteration in 0..iters {
        theta = step(theta, x, y, alpha)?;

        if theta.iter().any(|v| !v.is_finite()) {
            return Err(LogitError::NumericOverflow { iteration });
        }

        let cost = compute_cost(x, y, &theta).map_err(|err| match err {
            LogitError::InvalidValue { .. } => LogitError::NumericOverflow { iteration },
            other => other,
        })?;

        trace!(iteration, cost, "gradient descent step");
        costs.push(cost);
    }

    if let Some(last) = costs.last() {
        debug!(final_cost = *last, "gradient descent finished");
    }

    Ok(Descent { theta, costs })
}
