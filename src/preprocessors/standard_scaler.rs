use logit_core::{Float, LogitError, Matrix, Result, RowVector};

/// **Standardization** (z-score scaling) of feature columns.
///
/// Each column `j` is rescaled to zero mean and unit sample standard
/// deviation:
///
/// ```text
/// x'[i,j] = (x[i,j] − μ_j) / s_j
/// s_j     = sqrt( Σ_i (x[i,j] − μ_j)² / (n − 1) )
/// ```
///
/// The `n − 1` denominator is the sample (unbiased) estimator.
///
/// # Fields
///
/// - `means`: Column means `μ`, set by [`fit`](StandardScaler::fit)
/// - `stds`: Column sample standard deviations `s`, set by [`fit`](StandardScaler::fit)
///
/// # Errors
///
/// - [`LogitError::InsufficientTrainingData`] if fewer than 2 rows are fitted
/// - [`LogitError::InvalidValue`] if a column has zero or non-finite spread
/// - [`LogitError::NotFitted`] if [`transform`](StandardScaler::transform) runs before fit
/// - [`LogitError::ShapeMismatch`] if the column count changes between fit and transform
#[derive(Debug, Clone, Default)]
pub struct StandardScaler {
    means: Option<RowVector>,
    stds: Option<RowVector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learns column means and sample standard deviations from `x`.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let n = x.nrows();
        let d = x.ncols();

        if n < 2 {
            return Err(LogitError::InsufficientTrainingData);
        }

        let mut means = RowVector::zeros(d);
        let mut stds = RowVector::zeros(d);

        for j in 0..d {
            let col = x.column(j);
            let mean = col.sum() / n as Float;
            let ss: Float = col.iter().map(|&v| (v - mean) * (v - mean)).sum();
            let std = (ss / (n - 1) as Float).sqrt();

            if !std.is_finite() || std == 0.0 {
                return Err(LogitError::InvalidValue {
                    message: format!("Column {} has zero or non-finite spread", j),
                });
            }

            means[j] = mean;
            stds[j] = std;
        }

        self.means = Some(means);
        self.stds = Some(stds);
        Ok(())
    }

    /// Applies the learned scaling to `x`.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let (means, stds) = match (&self.means, &self.stds) {
            (Some(m), Some(s)) => (m, s),
            _ => return Err(LogitError::NotFitted),
        };

        if x.ncols() != means.ncols() {
            return Err(LogitError::ShapeMismatch {
                expected: format!("Expected {} features", means.ncols()),
                got: format!("Got {} features", x.ncols()),
            });
        }

        Ok(Matrix::from_fn(x.nrows(), x.ncols(), |i, j| {
            (x[(i, j)] - means[j]) / stds[j]
        }))
    }

    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }

    pub fn means(&self) -> Option<&RowVector> {
        self.means.as_ref()
    }

    pub fn stds(&self) -> Option<&RowVector> {
        self.stds.as_ref()
    }
}

/// Standardizes every column of `x` with its own mean and sample standard
/// deviation. Shorthand for `StandardScaler::new().fit_transform(x)`.
pub fn standardize(x: &Matrix) -> Result<Matrix> {
    StandardScaler::new().fit_transform(x)
}
