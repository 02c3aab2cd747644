//! The two-square vacuum cleaner world.
//!
//! A robot stands on one of two squares, `A` (left) and `B` (right),
//! either of which may be dirty. It can clean the square it is on, or
//! move left or right. The usual task is to leave both squares clean.

use searcher::{ProblemTrace, SearchProblem};

pub mod state;
pub mod transitions;

pub use state::{Dirt, Location, VacuumState};
pub use transitions::{Action, VacuumTable};

pub type VacuumProblem = SearchProblem<VacuumTable>;
pub type VacuumTrace = ProblemTrace<VacuumProblem>;

/// Every state of the world, and the moves between them.
#[derive(Debug, Clone)]
pub struct VacuumWorld {
    states: Vec<VacuumState>,
    table: VacuumTable,
}

impl Default for VacuumWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl VacuumWorld {
    pub fn new() -> Self {
        let states = VacuumState::all();
        let table = transitions::forward(&states);
        Self { states, table }
    }

    /// The world with every move reversed, for searching from a goal
    /// back towards a starting state.
    pub fn backward() -> Self {
        let states = VacuumState::all();
        let table = transitions::backward(&states);
        Self { states, table }
    }

    pub fn states(&self) -> &[VacuumState] {
        &self.states
    }

    pub fn table(&self) -> &VacuumTable {
        &self.table
    }

    /// Get from `initial` to any state in `goal`.
    pub fn problem<G>(&self, initial: VacuumState, goal: G) -> VacuumProblem
    where
        G: IntoIterator<Item = VacuumState>,
    {
        SearchProblem::new(initial, goal, Action::all(), self.table.clone())
    }

    /// Get from `initial` to a state where both squares are clean.
    pub fn cleaning(&self, initial: VacuumState) -> VacuumProblem {
        let goal: Vec<_> = self.states.iter().copied().filter(|s| s.is_clean()).collect();
        self.problem(initial, goal)
    }
}
