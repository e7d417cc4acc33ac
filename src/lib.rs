pub mod config;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod plot;
pub mod preprocessors;

// Re-export public API
pub use config::*;
pub use io::*;
pub use logit_core::*;
pub use logit_models::{gradient_descent, step, Descent, LogisticRegression};
pub use metrics::*;
pub use pipeline::*;
pub use plot::*;
pub use preprocessors::*;
