use log::info;

use crate::{
    algo::{Agent, QTableAgent, SarsaAgent, TdAgentConfig},
    config::{Algorithm, TrainConfig},
    ds::ValueTable,
    env::LineWorld,
    error::ConfigError,
    exploration::EpsilonGreedy,
    viz::Presenter,
};

/// Result of a training run
#[derive(Clone, Debug)]
pub struct TrainOutcome {
    /// The learned estimates
    pub table: ValueTable,
    /// Number of transitions taken in each episode
    pub steps: Vec<usize>,
}

/// Train an agent with the configured algorithm for `config.episode_count` episodes
///
/// The config is validated before anything else happens, so an invalid config never
/// reaches the presenter.
pub fn train(config: &TrainConfig, presenter: &mut dyn Presenter) -> Result<TrainOutcome, ConfigError> {
    config.validate()?;
    info!(
        "training {} on {} cells for {} episodes (epsilon {}, alpha {}, gamma {})",
        config.algorithm,
        config.table_size,
        config.episode_count,
        config.epsilon,
        config.learning_rate,
        config.discount_factor
    );

    let env = LineWorld::new(config.table_size);
    let agent_config = TdAgentConfig {
        policy: EpsilonGreedy::new(config.epsilon),
        alpha: config.learning_rate,
        gamma: config.discount_factor,
        seed: config.seed,
    };

    let outcome = match config.algorithm {
        Algorithm::QLearning => run(
            QTableAgent::new(&env, agent_config),
            &env,
            config.episode_count,
            presenter,
        ),
        Algorithm::Sarsa => run(
            SarsaAgent::new(&env, agent_config),
            &env,
            config.episode_count,
            presenter,
        ),
    };

    info!(
        "training finished after {} steps in total",
        outcome.steps.iter().sum::<usize>()
    );
    Ok(outcome)
}

fn run<A: Agent>(
    mut agent: A,
    env: &LineWorld,
    episodes: u32,
    presenter: &mut dyn Presenter,
) -> TrainOutcome {
    let steps = (0..episodes).map(|_| agent.go(env, presenter)).collect();
    TrainOutcome {
        table: agent.into_table(),
        steps,
    }
}
