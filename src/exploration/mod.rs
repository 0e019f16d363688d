use rand::RngCore;

use crate::{
    ds::ValueTable,
    env::{Action, State},
};

mod epsilon_greedy;

pub use epsilon_greedy::EpsilonGreedy;

/// Exploration policy result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// A behaviour policy mapping a state and the current estimates to an action
///
/// Implementations may draw from `rng` but must never modify the table.
pub trait Policy {
    fn select(&self, state: State, table: &ValueTable, rng: &mut dyn RngCore) -> Action;
}

/// Always plays the same action
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub Action);

impl Policy for Fixed {
    fn select(&self, _state: State, _table: &ValueTable, _rng: &mut dyn RngCore) -> Action {
        self.0
    }
}
