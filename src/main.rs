use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use td_walk::{
    train,
    viz::{ConsolePresenter, NullPresenter, Presenter},
    TrainConfig,
};

/// Train a tabular agent to walk to the right end of a line
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file; omitted fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// "q-learning" or "sarsa"
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of episodes to train for
    #[arg(short, long)]
    episodes: Option<u32>,

    /// Number of cells in the world
    #[arg(long)]
    table_size: Option<usize>,

    /// Probability of acting greedily
    #[arg(long)]
    epsilon: Option<f32>,

    #[arg(long)]
    learning_rate: Option<f32>,

    #[arg(long)]
    discount_factor: Option<f32>,

    /// Seed for the random source
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after drawing each step, in milliseconds
    #[arg(long)]
    fresh_time_ms: Option<u64>,

    /// Don't draw the world while training
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => TrainConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.parse()?;
        }
        if let Some(episodes) = self.episodes {
            config.episode_count = episodes;
        }
        if let Some(size) = self.table_size {
            config.table_size = size;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        if let Some(rate) = self.learning_rate {
            config.learning_rate = rate;
        }
        if let Some(discount) = self.discount_factor {
            config.discount_factor = discount;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(ms) = self.fresh_time_ms {
            config.fresh_time_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let quiet = cli.quiet;
    let config = cli.into_config()?;

    let mut console;
    let mut null = NullPresenter;
    let presenter: &mut dyn Presenter = if quiet {
        &mut null
    } else {
        console = ConsolePresenter::stdout(
            config.table_size,
            config.fresh_time(),
            config.episode_pause(),
        );
        &mut console
    };

    let outcome = train(&config, presenter)?;

    println!("\nThe trained Q-table:");
    print!("{}", outcome.table);
    println!("Steps per episode: {:?}", outcome.steps);
    Ok(())
}
