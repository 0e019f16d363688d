use std::fmt;

use rand::{seq::SliceRandom, Rng};
use strum::VariantArray;

/// A position in the [`LineWorld`]
///
/// Every `Cell` index is a valid row of the value table. `Terminal` has no row of
/// its own, so consumers must match on it before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    Cell(usize),
    Terminal,
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Terminal)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Cell(i) => write!(f, "{i}"),
            State::Terminal => f.write_str("terminal"),
        }
    }
}

/// A move along the line
///
/// The discriminant doubles as the column of the action in the value table.
#[derive(VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Left = 0,
    Right = 1,
}

impl Action {
    /// Column index of this action
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pick an action uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Action::VARIANTS
            .choose(rng)
            .expect("Action has at least one variant")
    }
}

/// A one-dimensional world of `size` cells with the goal at the far right
///
/// The agent starts in cell `0`. Stepping right from cell `size - 2` reaches the
/// terminal state and yields the only nonzero reward in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineWorld {
    size: usize,
}

impl LineWorld {
    /// **Panics** if `size < 2`. Use a validated [`TrainConfig`](crate::config::TrainConfig)
    /// to get a recoverable error instead.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "LineWorld needs at least 2 cells, got {size}");
        Self { size }
    }

    /// Number of cells, which is also the number of value table rows
    pub fn size(&self) -> usize {
        self.size
    }

    /// The state every episode starts from
    pub fn start(&self) -> State {
        State::Cell(0)
    }

    /// Transition function of the world
    ///
    /// **Returns** `(next_state, reward)`
    pub fn step(&self, state: State, action: Action) -> (State, f32) {
        match (state, action) {
            (State::Terminal, Action::Right) => (State::Terminal, 1.0),
            (State::Terminal, Action::Left) => (State::Terminal, 0.0),
            (State::Cell(i), Action::Right) if i == self.size - 2 => (State::Terminal, 1.0),
            (State::Cell(i), Action::Right) => (State::Cell(i + 1), 0.0),
            (State::Cell(i), Action::Left) => (State::Cell(i.saturating_sub(1)), 0.0),
        }
    }
}
