/// Temporal-difference agents
pub mod algo;

/// Training configuration
pub mod config;

/// Data structures
pub mod ds;

/// The one-dimensional world
pub mod env;

/// Errors
pub mod error;

/// Exploration policies
pub mod exploration;

/// Training runs
pub mod train;

/// Rendering the world as it is explored
pub mod viz;

mod util;

pub use config::{Algorithm, TrainConfig};
pub use ds::ValueTable;
pub use env::{Action, LineWorld, State};
pub use error::ConfigError;
pub use train::{train, TrainOutcome};
