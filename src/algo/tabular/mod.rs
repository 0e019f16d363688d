use rand::{rngs::StdRng, SeedableRng};

use crate::{ds::ValueTable, env::LineWorld, exploration::EpsilonGreedy};

pub mod q_table;
pub mod sarsa;

pub use q_table::QTableAgent;
pub use sarsa::SarsaAgent;

/// Configuration shared by the temporal-difference agents
#[derive(Clone, Debug)]
pub struct TdAgentConfig<P> {
    /// Behaviour policy used to pick actions
    pub policy: P,
    /// Learning rate, in `(0,1]`
    pub alpha: f32,
    /// Discount factor, in `[0,1]`
    pub gamma: f32,
    /// Seed for the agent's random source, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for TdAgentConfig<EpsilonGreedy> {
    fn default() -> Self {
        Self {
            policy: EpsilonGreedy::new(0.9),
            alpha: 0.1,
            gamma: 0.9,
            seed: None,
        }
    }
}

impl<P> TdAgentConfig<P> {
    /// **Panics** if `alpha` is not in `(0,1]` or `gamma` is not in `[0,1]`
    fn check(&self) {
        assert!(
            self.alpha > 0.0 && self.alpha <= 1.0,
            "Invalid value for `alpha`. Must be in the interval (0, 1]."
        );
        assert!(
            (0.0..=1.0).contains(&self.gamma),
            "Invalid value for `gamma`. Must be in the interval [0, 1]."
        );
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// **Panics** if `env` has a different number of cells than `table` has rows
fn check_world(table: &ValueTable, env: &LineWorld) {
    assert_eq!(
        table.len(),
        env.size(),
        "Agent was built for a world of {} cells but was run in one of {}",
        table.len(),
        env.size()
    );
}
