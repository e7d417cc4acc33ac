use std::path::Path;

use logit_core::{compute_cost, Float, Result, RowVector};
use logit_models::LogisticRegression;
use tracing::info;

use crate::config::TrainingConfig;
use crate::io::{load_dataset, Dataset};
use crate::metrics::accuracy;

/// Outcome of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Cost at `θ = 0`.
    pub initial_cost: Float,
    /// Parameters after the last iteration, intercept first.
    pub theta: RowVector,
    /// Cost at the final `θ`; equals `initial_cost` when no iterations ran.
    pub final_cost: Float,
    /// Cost after every iteration.
    pub costs: Vec<Float>,
    /// Training-set accuracy at a `0.5` threshold.
    pub accuracy: Float,
}

/// Loads the dataset at `path` and trains on it with `config`.
pub fn train<P: AsRef<Path>>(path: P, config: &TrainingConfig) -> Result<TrainingReport> {
    config.validate()?;
    let dataset = load_dataset(path, &config.load_options())?;
    train_dataset(&dataset, config)
}

/// Trains on an already loaded dataset.
///
/// The `standardize` flag of `config` is not applied here; it belongs to
/// loading.
pub fn train_dataset(dataset: &Dataset, config: &TrainingConfig) -> Result<TrainingReport> {
    config.validate()?;

    let initial_cost = compute_cost(&dataset.x, &dataset.y, &dataset.theta0())?;
    info!(
        samples = dataset.n_samples(),
        features = dataset.n_features(),
        initial_cost,
        "training started"
    );

    let mut model = LogisticRegression::new(config.learning_rate, config.iterations);
    model.fit(&dataset.x, &dataset.y)?;

    let theta = model.theta().cloned().unwrap_or_else(|| dataset.theta0());
    let final_cost = compute_cost(&dataset.x, &dataset.y, &theta)?;
    let accuracy = accuracy(&model.predict(&dataset.x)?, &dataset.y)?;

    info!(final_cost, accuracy, "training finished");

    Ok(TrainingReport {
        initial_cost,
        theta,
        final_cost,
        costs: model.cost_history().to_vec(),
        accuracy,
    })
}
