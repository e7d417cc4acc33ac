use logit_core::{Float, LogitError, Result};

use crate::io::LoadOptions;

/// Hyperparameters and preprocessing switches for one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    /// Gradient-descent step size `α`.
    pub learning_rate: Float,
    /// Fixed number of gradient-descent iterations.
    pub iterations: usize,
    /// Standardize feature columns before adding the bias column.
    pub standardize: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
            standardize: false,
        }
    }
}

impl TrainingConfig {
    /// Rejects a learning rate that is not finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LogitError::InvalidHyperparameter {
                name: "learning_rate".into(),
                value: self.learning_rate.to_string(),
            });
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            standardize: self.standardize,
            ..LoadOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrainingConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.load_options().standardize);
    }

    #[test]
    fn test_invalid_learning_rate() {
        for learning_rate in [0.0, -1.0, Float::NAN] {
            let config = TrainingConfig {
                learning_rate,
                ..TrainingConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(LogitError::InvalidHyperparameter { .. })
            ));
        }
    }

    #[test]
    fn test_standardize_flag_reaches_loader() {
        let config = TrainingConfig {
            standardize: true,
            ..TrainingConfig::default()
        };
        assert!(config.load_options().standardize);
        assert_eq!(config.load_options().expected_columns, 3);
    }
}
