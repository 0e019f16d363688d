use std::{
    fmt,
    ops::{Index, IndexMut},
};

use strum::VariantArray;

use crate::env::Action;

const NUM_ACTIONS: usize = Action::VARIANTS.len();

/// A dense table of action value estimates, one row per cell and one column per [`Action`]
///
/// All entries start at zero. Rows are addressed by cell index; indexing past the
/// last row panics with the offending index.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    rows: Vec<[f32; NUM_ACTIONS]>,
}

impl ValueTable {
    /// Constructs a zeroed table with `num_states` rows
    pub fn new(num_states: usize) -> Self {
        Self {
            rows: vec![[0.0; NUM_ACTIONS]; num_states],
        }
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get an estimate, or `None` if `state` is out of bounds
    pub fn get(&self, state: usize, action: Action) -> Option<f32> {
        self.rows.get(state).map(|row| row[action.index()])
    }

    /// Overwrite an estimate
    pub fn set(&mut self, state: usize, action: Action, value: f32) {
        self[(state, action)] = value;
    }

    /// Get all estimates for one state, ordered like [`Action::VARIANTS`]
    pub fn row(&self, state: usize) -> &[f32; NUM_ACTIONS] {
        &self.rows[self.checked(state)]
    }

    /// Greatest estimate in a row
    pub fn max(&self, state: usize) -> f32 {
        self.row(state)
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Action with the greatest estimate in a row
    ///
    /// Ties go to the action that comes first in [`Action::VARIANTS`], so `Left` wins
    /// over `Right` when both are equal.
    pub fn argmax(&self, state: usize) -> Action {
        let row = self.row(state);
        let mut best = 0;
        for (i, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = i;
            }
        }
        Action::VARIANTS[best]
    }

    /// True if every estimate in the row is exactly zero
    pub fn is_row_zero(&self, state: usize) -> bool {
        self.row(state).iter().all(|&v| v == 0.0)
    }

    /// Iterate over `(state, row)` pairs in state order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f32; NUM_ACTIONS])> {
        self.rows.iter().enumerate()
    }

    fn checked(&self, state: usize) -> usize {
        assert!(
            state < self.rows.len(),
            "State {} is out of bounds for a table with {} rows",
            state,
            self.rows.len()
        );
        state
    }
}

impl Index<(usize, Action)> for ValueTable {
    type Output = f32;

    fn index(&self, (state, action): (usize, Action)) -> &Self::Output {
        &self.rows[self.checked(state)][action.index()]
    }
}

impl IndexMut<(usize, Action)> for ValueTable {
    fn index_mut(&mut self, (state, action): (usize, Action)) -> &mut Self::Output {
        let state = self.checked(state);
        &mut self.rows[state][action.index()]
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.len().saturating_sub(1).to_string().len();
        writeln!(f, "{:>width$} {:>10} {:>10}", "", "left", "right")?;
        for (state, [left, right]) in self.iter() {
            writeln!(f, "{state:>width$} {left:>10.6} {right:>10.6}")?;
        }
        Ok(())
    }
}
