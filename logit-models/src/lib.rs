pub mod gradient_descent;
pub mod logistic_regression;

pub use gradient_descent::{gradient_descent, step, Descent};
pub use logistic_regression::LogisticRegression;
