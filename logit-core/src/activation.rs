use crate::{check_theta, Float, Matrix, Result, RowVector, Vector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the **logistic sigmoid** of `z`.
///
/// The sigmoid maps any real number to a probability in `(0, 1)`:
///
/// ```text
/// σ(z) = 1 / (1 + e^(−z))
/// ```
///
/// # Numerical stability
///
/// The textbook form overflows `e^(−z)` for large negative `z`. This
/// implementation evaluates the equivalent form
///
/// ```text
/// σ(z) = e^z / (1 + e^z)      for z < 0
/// ```
///
/// so the exponent is never positive and no intermediate value overflows.
/// For very large `|z|` the result still rounds to exactly `0.0` or `1.0`
/// in `f64`; the cost function clamps probabilities before taking logs.
///
/// # Examples
///
/// ```rust
/// use logit_core::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(3.0) > sigmoid(2.0));
/// ```
pub fn sigmoid(z: Float) -> Float {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Computes the model hypothesis `h = σ(X θᵀ)` for every row of `x`.
///
/// # Parameters
///
/// - `x`: Design matrix of shape `(m, n + 1)`, bias column included.
/// - `theta`: Parameter row vector of length `n + 1`.
///
/// # Returns
///
/// A column vector of `m` probabilities.
///
/// # Errors
///
/// - [`LogitError::ShapeMismatch`](crate::LogitError::ShapeMismatch) if
///   `theta.ncols() != x.ncols()`.
///
/// # Notes
///
/// With the `parallel` feature the elementwise sigmoid runs on rayon. The
/// matrix-vector product and every reduction stay sequential, so the
/// output is bit-identical either way.
pub fn hypothesis(x: &Matrix, theta: &RowVector) -> Result<Vector> {
    check_theta(x, theta)?;

    let mut h: Vector = x * theta.transpose();
    apply_sigmoid(&mut h);
    Ok(h)
}

#[cfg(feature = "parallel")]
fn apply_sigmoid(z: &mut Vector) {
    z.as_mut_slice()
        .par_iter_mut()
        .for_each(|v| *v = sigmoid(*v));
}

#[cfg(not(feature = "parallel"))]
fn apply_sigmoid(z: &mut Vector) {
    z.iter_mut().for_each(|v| *v = sigmoid(*v));
}
