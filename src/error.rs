use thiserror::Error;

/// Reasons a training configuration is rejected before any episode runs
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment needs cells `0` and `N-2` to be distinct
    #[error("`table_size` must be at least 2, got {0}")]
    TableTooSmall(usize),

    #[error("`episode_count` must be greater than 0")]
    NoEpisodes,

    #[error("invalid value for `{name}`: {value}. Must be in the interval {interval}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        interval: &'static str,
    },

    #[error("unknown algorithm `{0}`, expected \"q-learning\" or \"sarsa\"")]
    InvalidAlgorithm(String),

    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file")]
    Parse(#[from] serde_json::Error),
}
