use log::trace;

use crate::{
    ds::ValueTable,
    env::{Action, LineWorld, State},
    viz::Presenter,
};

pub mod tabular;

pub use tabular::{QTableAgent, SarsaAgent, TdAgentConfig};

/// A single transition observed while acting
///
/// `state` is always a cell, so it is stored as its row index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exp {
    /// The row of the state the action was taken in
    pub state: usize,
    /// The action taken in the given state
    pub action: Action,
    /// The state of the environment after the action is taken
    pub next_state: State,
    /// The reward received after taking the action
    pub reward: f32,
}

/// A learner that improves its value table one episode at a time
pub trait Agent {
    /// Run one episode from the start state to the terminal state, notifying
    /// `presenter` after the reset and after every transition
    ///
    /// **Returns** the number of transitions taken
    fn go(&mut self, env: &LineWorld, presenter: &mut dyn Presenter) -> usize;

    /// The current estimates
    fn table(&self) -> &ValueTable;

    /// Consume the agent, keeping only what it learned
    fn into_table(self) -> ValueTable
    where
        Self: Sized;
}

/// Move `table[exp.state, exp.action]` a fraction `alpha` of the way toward `target`
///
/// **Returns** the new estimate
pub(crate) fn td_update(table: &mut ValueTable, exp: &Exp, target: f32, alpha: f32) -> f32 {
    let entry = &mut table[(exp.state, exp.action)];
    let old = *entry;
    *entry = old + alpha * (target - old);
    trace!(
        "state {} {:?}: {old} -> {} (target {target})",
        exp.state,
        exp.action,
        *entry
    );
    *entry
}
