use crate::{LogitError, Matrix, Result, RowVector, Vector};

/// Checks that `x`, `y` and `theta` describe the same problem:
/// `y` has one label per row of `x` and `theta` one weight per column.
///
/// # Errors
///
/// - [`LogitError::EmptyTrainingData`] if `x` has zero rows.
/// - [`LogitError::ShapeMismatch`] if either dimension disagrees.
pub fn check_shapes(x: &Matrix, y: &Vector, theta: &RowVector) -> Result<()> {
    if x.nrows() == 0 {
        return Err(LogitError::EmptyTrainingData);
    }
    if y.len() != x.nrows() {
        return Err(LogitError::ShapeMismatch {
            expected: format!("Expected {} labels", x.nrows()),
            got: format!("Got {}", y.len()),
        });
    }
    check_theta(x, theta)
}

/// Checks that `theta` carries one weight per column of `x`.
pub fn check_theta(x: &Matrix, theta: &RowVector) -> Result<()> {
    if theta.ncols() != x.ncols() {
        return Err(LogitError::ShapeMismatch {
            expected: format!("Expected {} parameters", x.ncols()),
            got: format!("Got {}", theta.ncols()),
        });
    }
    Ok(())
}
