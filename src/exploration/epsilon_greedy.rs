use rand::{Rng, RngCore};

use crate::{
    ds::ValueTable,
    env::{Action, State},
};

use super::{Choice, Policy};

/// Epsilon greedy exploration policy with a constant threshold
///
/// `epsilon` is the probability of exploiting: a uniform draw above `epsilon`
/// explores. A state whose estimates are all zero carries no information and is
/// always explored.
#[derive(Clone, Copy, Debug)]
pub struct EpsilonGreedy {
    epsilon: f32,
}

impl EpsilonGreedy {
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn new(epsilon: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&epsilon),
            "Invalid value for `epsilon`. Must be in the interval [0, 1]."
        );
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Invoke the epsilon threshold
    pub fn choose(&self, rng: &mut dyn RngCore) -> Choice {
        if rng.gen::<f32>() > self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

impl Policy for EpsilonGreedy {
    fn select(&self, state: State, table: &ValueTable, rng: &mut dyn RngCore) -> Action {
        let row = match state {
            State::Cell(i) => i,
            // Never updated, but an action is still requested after the episode ends
            State::Terminal => table.len() - 1,
        };

        match self.choose(rng) {
            Choice::Exploit if !table.is_row_zero(row) => table.argmax(row),
            _ => Action::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn trained_table() -> ValueTable {
        let mut table = ValueTable::new(3);
        table.set(0, Action::Right, 0.5);
        table.set(2, Action::Left, 0.2);
        table
    }

    #[test]
    fn epsilon_one_always_exploits_informed_rows() {
        let policy = EpsilonGreedy::new(1.0);
        let table = trained_table();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(policy.choose(&mut rng), Choice::Exploit);
            assert_eq!(policy.select(State::Cell(0), &table, &mut rng), Action::Right);
        }
    }

    #[test]
    fn epsilon_zero_always_explores() {
        let policy = EpsilonGreedy::new(0.0);
        let table = trained_table();
        let mut rng = StdRng::seed_from_u64(1);
        let picks: Vec<Action> = (0..100)
            .map(|_| policy.select(State::Cell(0), &table, &mut rng))
            .collect();
        assert!(picks.contains(&Action::Left), "Exploration reaches the worse action");
        assert!(picks.contains(&Action::Right));
    }

    #[test]
    fn zero_row_is_explored_even_when_greedy() {
        let policy = EpsilonGreedy::new(1.0);
        let table = trained_table();
        let mut rng = StdRng::seed_from_u64(2);
        let picks: Vec<Action> = (0..100)
            .map(|_| policy.select(State::Cell(1), &table, &mut rng))
            .collect();
        assert!(picks.contains(&Action::Left));
        assert!(picks.contains(&Action::Right));
    }

    #[test]
    fn terminal_reads_last_row() {
        let policy = EpsilonGreedy::new(1.0);
        let table = trained_table();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(policy.select(State::Terminal, &table, &mut rng), Action::Left);
    }

    #[test]
    fn equal_nonzero_row_breaks_tie_left() {
        let policy = EpsilonGreedy::new(1.0);
        let mut table = ValueTable::new(1);
        table.set(0, Action::Left, 0.4);
        table.set(0, Action::Right, 0.4);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            assert_eq!(policy.select(State::Cell(0), &table, &mut rng), Action::Left);
        }
    }

    #[test]
    fn select_does_not_modify_table() {
        let policy = EpsilonGreedy::new(0.5);
        let table = trained_table();
        let before = table.clone();
        let mut rng = StdRng::seed_from_u64(5);
        for state in [State::Cell(0), State::Cell(1), State::Terminal] {
            policy.select(state, &table, &mut rng);
        }
        assert_eq!(table, before);
    }

    #[test]
    #[should_panic]
    fn epsilon_out_of_range_panics() {
        EpsilonGreedy::new(1.5);
    }
}
