use std::fmt;

#[derive(Debug)]
pub enum LogitError {
    /// IO-related failures (file not found, unreadable, etc.)
    Io(String),

    /// CSV reader failures that are not tied to a single row
    Csv(String),

    /// A data row that is not three well-formed numeric fields
    MalformedRow { line: usize, message: String },

    /// Shape or dimensionality mismatch
    ShapeMismatch { expected: String, got: String },

    /// Model used before calling `fit`
    NotFitted,

    /// The training dataset contains zero samples.
    EmptyTrainingData,

    /// Not enough samples for the requested operation
    InsufficientTrainingData,

    /// Invalid Hyperparameter Value
    InvalidHyperparameter { name: String, value: String },

    /// Invalid value
    InvalidValue { message: String },

    /// Labels outside of {0, 1}.
    InvalidTrainingData,

    /// Cost or parameters stopped being finite during optimization.
    NumericOverflow { iteration: usize },

    /// Chart rendering failed.
    Plot(String),
}

impl fmt::Display for LogitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for LogitError {}

impl From<std::io::Error> for LogitError {
    fn from(err: std::io::Error) -> Self {
        LogitError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LogitError>;
