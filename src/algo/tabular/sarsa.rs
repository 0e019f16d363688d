use log::debug;
use rand::rngs::StdRng;

use crate::{
    algo::{td_update, Agent, Exp},
    ds::ValueTable,
    env::{Action, LineWorld, State},
    exploration::{EpsilonGreedy, Policy},
    viz::Presenter,
};

use super::{check_world, TdAgentConfig};

/// A SARSA agent that records its estimates in a [`ValueTable`]
///
/// The action for the next state is chosen before the update and then played on
/// the following step, so the bootstrap target follows the behaviour policy.
pub struct SarsaAgent<P = EpsilonGreedy> {
    table: ValueTable,
    policy: P,
    alpha: f32,
    gamma: f32,
    episode: u32,
    rng: StdRng,
}

impl<P: Policy> SarsaAgent<P> {
    /// Initialize a new `SarsaAgent` with a zeroed table of one row per cell of `env`
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

    /// Bootstrap target for a transition followed by `next_action`
    pub fn target(&self, exp: &Exp, next_action: Action) -> f32 {
        match exp.next_state {
            State::Cell(next) => exp.reward + self.gamma * self.table[(next, next_action)],
            State::Terminal => exp.reward,
        }
    }

    fn learn(&mut self, exp: Exp, next_action: Action) {
        let target = self.target(&exp, next_action);
        td_update(&mut self.table, &exp, target, self.alpha);
    }
}

impl<P: Policy> Agent for SarsaAgent<P> {
    fn go(&mut self, env: &LineWorld, presenter: &mut dyn Presenter) -> usize {
        check_world(&self.table, env);
        let mut state = env.start();
        let mut steps = 0;
        presenter.on_step(state, self.episode, steps);

        let mut action = self.policy.select(state, &self.table, &mut self.rng);
        while let State::Cell(row) = state {
            let (next_state, reward) = env.step(state, action);
            let next_action = self.policy.select(next_state, &self.table, &mut self.rng);

            self.learn(
                Exp {
                    state: row,
                    action,
                    next_state,
                    reward,
                },
                next_action,
            );

            state = next_state;
            action = next_action;
            steps += 1;
            presenter.on_step(state, self.episode, steps);
        }

        debug!("sarsa episode {} finished in {steps} steps", self.episode);
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
