use log::debug;
use rand::rngs::StdRng;

use crate::{
    algo::{td_update, Agent, Exp},
    ds::ValueTable,
    env::{LineWorld, State},
    exploration::{EpsilonGreedy, Policy},
    viz::Presenter,
};

use super::{check_world, TdAgentConfig};

/// A Q-learning agent that records its estimates in a [`ValueTable`]
///
/// The bootstrap target uses the best estimate of the next state, whatever the
/// behaviour policy would actually do there, so the learned values do not depend
/// on how the agent explores.
pub struct QTableAgent<P = EpsilonGreedy> {
    table: ValueTable,
    policy: P,
    alpha: f32,   // learning rate
    gamma: f32,   // discount factor
    episode: u32, // current episode
    rng: StdRng,
}

impl<P: Policy> QTableAgent<P> {
    /// Initialize a new `QTableAgent` with a zeroed table of one row per cell of `env`
    ///
    /// **Panics** if `alpha` is not in `(0,1]` or `gamma` is not in `[0,1]`
    pub fn new(env: &LineWorld, config: TdAgentConfig<P>) -> Self {
        config.check();
        let rng = config.rng();
        Self {
            table: ValueTable::new(env.size()),
            policy: config.policy,
            alpha: config.alpha,
            gamma: config.gamma,
            episode: 0,
            rng,
        }
    }

    /// Bootstrap target for a transition
    pub fn target(&self, exp: &Exp) -> f32 {
        match exp.next_state {
            State::Cell(next) => exp.reward + self.gamma * self.table.max(next),
            State::Terminal => exp.reward,
        }
    }

    fn learn(&mut self, exp: Exp) {
        let target = self.target(&exp);
        td_update(&mut self.table, &exp, target, self.alpha);
    }
}

impl<P: Policy> Agent for QTableAgent<P> {
    fn go(&mut self, env: &LineWorld, presenter: &mut dyn Presenter) -> usize {
        check_world(&self.table, env);
        let mut state = env.start();
        let mut steps = 0;
        presenter.on_step(state, self.episode, steps);

        while let State::Cell(row) = state {
            let action = self.policy.select(state, &self.table, &mut self.rng);
            let (next_state, reward) = env.step(state, action);

            self.learn(Exp {
                state: row,
                action,
                next_state,
                reward,
            });

            state = next_state;
            steps += 1;
            presenter.on_step(state, self.episode, steps);
        }

        debug!("q-learning episode {} finished in {steps} steps", self.episode);
        self.episode += 1;
        steps
    }

    fn table(&self) -> &ValueTable {
        &self.table
    }

    fn into_table(self) -> ValueTable {
        self.table
    }
}
