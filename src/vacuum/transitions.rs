use std::fmt;

use searcher::TransitionTable;

use super::state::{Dirt, Location, VacuumState};

/// Things the robot can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Clean,
    Left,
    Right,
}

impl Action {
    /// Every action, in the order the search tries them.
    pub fn all() -> Vec<Self> {
        vec![Action::Clean, Action::Left, Action::Right]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Clean => write!(f, "Clean"),
            Action::Left => write!(f, "Left"),
            Action::Right => write!(f, "Right"),
        }
    }
}

pub type VacuumTable = TransitionTable<VacuumState, Action>;

/// The moves which change the world from `state`.
///
/// Cleaning a clean square, or walking into a wall, does nothing,
/// so those moves are left out of the table.
fn moves(state: &VacuumState) -> Vec<(Action, VacuumState)> {
    let mut moves = Vec::with_capacity(2);

    if state.dirt(state.location()) == Dirt::Dirty {
        moves.push((Action::Clean, state.cleaned()));
    }

    match state.location() {
        Location::A => moves.push((Action::Right, state.moved(Location::B))),
        Location::B => moves.push((Action::Left, state.moved(Location::A))),
    }

    moves
}

/// Build the transition table for the given states.
pub fn forward(states: &[VacuumState]) -> VacuumTable {
    let mut table = VacuumTable::new();
    for state in states {
        for (action, next) in moves(state) {
            table.insert(*state, action, next);
        }
    }
    table
}

/// Build the transition table with every move undone: each edge
/// leads from the state a move produces back to where it started.
pub fn backward(states: &[VacuumState]) -> VacuumTable {
    let mut table = VacuumTable::new();
    for state in states {
        for (action, next) in moves(state) {
            table.insert(next, action, *state);
        }
    }
    table
}
