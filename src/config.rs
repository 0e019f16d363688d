use std::{fmt, fs, path::Path, str::FromStr, time::Duration};

use serde::Deserialize;

use crate::{error::ConfigError, util::check_interval};

/// Which temporal-difference update to train with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Off-policy, bootstraps from the best next action
    QLearning,
    /// On-policy, bootstraps from the next action actually taken
    Sarsa,
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "q-learning" => Ok(Algorithm::QLearning),
            "sarsa" => Ok(Algorithm::Sarsa),
            other => Err(ConfigError::InvalidAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::QLearning => "q-learning",
            Algorithm::Sarsa => "sarsa",
        })
    }
}

/// Hyperparameters for a training run
///
/// Read once before training and never changed while it runs. Call
/// [`validate`](Self::validate) after editing fields by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Number of cells in the world, at least 2
    pub table_size: usize,
    /// Probability of acting greedily on a state with nonzero estimates, in `[0,1]`
    pub epsilon: f32,
    /// In `(0,1]`
    pub learning_rate: f32,
    /// In `[0,1]`
    pub discount_factor: f32,
    pub episode_count: u32,
    pub algorithm: Algorithm,
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Pause after drawing each step
    pub fresh_time_ms: u64,
    /// Pause after drawing each episode summary
    pub episode_pause_ms: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            table_size: 10,
            epsilon: 0.9,
            learning_rate: 0.1,
            discount_factor: 0.9,
            episode_count: 20,
            algorithm: Algorithm::Sarsa,
            seed: Some(2),
            fresh_time_ms: 300,
            episode_pause_ms: 2000,
        }
    }
}

impl TrainConfig {
    /// Parse a JSON config, filling omitted fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let config = Self::try_from(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Check every field against its constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size < 2 {
            return Err(ConfigError::TableTooSmall(self.table_size));
        }
        if self.episode_count == 0 {
            return Err(ConfigError::NoEpisodes);
        }
        check_interval!(self.epsilon, 0.0, 1.0);
        check_interval!(self.learning_rate, open 0.0, 1.0);
        check_interval!(self.discount_factor, 0.0, 1.0);
        Ok(())
    }

    pub fn fresh_time(&self) -> Duration {
        Duration::from_millis(self.fresh_time_ms)
    }

    pub fn episode_pause(&self) -> Duration {
        Duration::from_millis(self.episode_pause_ms)
    }
}

/// On-disk form of [`TrainConfig`], with the algorithm still a raw name
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    table_size: usize,
    epsilon: f32,
    learning_rate: f32,
    discount_factor: f32,
    episode_count: u32,
    algorithm: String,
    seed: Option<u64>,
    fresh_time_ms: u64,
    episode_pause_ms: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let d = TrainConfig::default();
        Self {
            table_size: d.table_size,
            epsilon: d.epsilon,
            learning_rate: d.learning_rate,
            discount_factor: d.discount_factor,
            episode_count: d.episode_count,
            algorithm: d.algorithm.to_string(),
            seed: d.seed,
            fresh_time_ms: d.fresh_time_ms,
            episode_pause_ms: d.episode_pause_ms,
        }
    }
}

impl TryFrom<ConfigFile> for TrainConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        Ok(Self {
            table_size: file.table_size,
            epsilon: file.epsilon,
            learning_rate: file.learning_rate,
            discount_factor: file.discount_factor,
            episode_count: file.episode_count,
            algorithm: file.algorithm.parse()?,
            seed: file.seed,
            fresh_time_ms: file.fresh_time_ms,
            episode_pause_ms: file.episode_pause_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TrainConfig::default().validate().is_ok());
    }

    #[test]
    fn algorithm_names() {
        assert_eq!("q-learning".parse::<Algorithm>().unwrap(), Algorithm::QLearning);
        assert_eq!("sarsa".parse::<Algorithm>().unwrap(), Algorithm::Sarsa);
        assert!(matches!(
            "td-lambda".parse::<Algorithm>(),
            Err(ConfigError::InvalidAlgorithm(name)) if name == "td-lambda"
        ));
        assert_eq!(Algorithm::QLearning.to_string(), "q-learning");
    }

    #[test]
    fn rejects_small_table() {
        let config = TrainConfig {
            table_size: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TableTooSmall(1))));
    }

    #[test]
    fn rejects_zero_episodes() {
        let config = TrainConfig {
            episode_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoEpisodes)));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let cases = [
            (
                TrainConfig {
                    epsilon: 1.5,
                    ..Default::default()
                },
                "epsilon",
            ),
            (
                TrainConfig {
                    learning_rate: 0.0,
                    ..Default::default()
                },
                "learning_rate",
            ),
            (
                TrainConfig {
                    discount_factor: -0.1,
                    ..Default::default()
                },
                "discount_factor",
            ),
            (
                TrainConfig {
                    epsilon: f32::NAN,
                    ..Default::default()
                },
                "epsilon",
            ),
        ];
        for (config, field) in cases {
            match config.validate() {
                Err(ConfigError::OutOfRange { name, .. }) => assert_eq!(name, field),
                other => panic!("Expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn accepts_boundary_values() {
        let config = TrainConfig {
            table_size: 2,
            epsilon: 0.0,
            learning_rate: 1.0,
            discount_factor: 1.0,
            episode_count: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_fills_defaults() {
        let config =
            TrainConfig::from_json_str(r#"{ "algorithm": "q-learning", "table_size": 6, "seed": null }"#)
                .unwrap();
        assert_eq!(config.algorithm, Algorithm::QLearning);
        assert_eq!(config.table_size, 6);
        assert_eq!(config.seed, None);
        assert_eq!(config.episode_count, 20);
        assert_eq!(config.fresh_time(), Duration::from_millis(300));
    }

    #[test]
    fn json_rejects_unknown_algorithm() {
        let err = TrainConfig::from_json_str(r#"{ "algorithm": "monte-carlo" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAlgorithm(name) if name == "monte-carlo"));
    }

    #[test]
    fn json_rejects_unknown_field() {
        let err = TrainConfig::from_json_str(r#"{ "leaning_rate": 0.1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_is_validated() {
        let err = TrainConfig::from_json_str(r#"{ "table_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TableTooSmall(0)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TrainConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
