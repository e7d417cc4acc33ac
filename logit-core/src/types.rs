pub type Float = f64;
pub type Label = usize;

/// Design matrix, one sample per row. Column 0 holds the bias term once
/// the loader has added it.
pub type Matrix = nalgebra::DMatrix<Float>;

/// Column vector, used for labels and per-sample outputs.
pub type Vector = nalgebra::DVector<Float>;

/// Row vector, used for the parameter vector θ.
pub type RowVector = nalgebra::RowDVector<Float>;

pub type Predictions = Vec<Label>;
