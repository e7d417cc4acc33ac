pub mod activation;
pub mod error;
pub mod loss;
pub mod types;
pub mod utils;

pub use types::{Float, Label, Matrix, Predictions, RowVector, Vector};

pub use error::{LogitError, Result};

pub use activation::{hypothesis, sigmoid};
pub use loss::{compute_cost, log_loss, PROBABILITY_EPSILON};
pub use utils::{check_shapes, check_theta};
