use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use num::Zero;

/// Describes how actions move between states, and what
/// each move costs.
///
/// Implementations must be deterministic: the same state and
/// action always produce the same next state.
pub trait TransitionModel {
    type State;
    type Action;
    type Cost;

    /// The state produced by applying `action` in `state`.
    ///
    /// Actions which do not apply in a state should leave the
    /// state unchanged.
    fn act(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The cost of moving from `state` to `next` via `action`.
    ///
    /// Costs are expected to be non-negative, but the search
    /// does not check this.
    fn cost(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> Self::Cost;
}

/// Provides an interface for a state-space search problem.
///
/// The problem owns the initial state, the goal test, the ordered
/// set of actions which are tried in every state, and the transition
/// model which applies them.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: Debug + Copy + PartialOrd + Zero;
    type Model: TransitionModel<State = Self::State, Action = Self::Action, Cost = Self::Cost>;

    /// The state the search begins from.
    fn initial(&self) -> Self::State;

    /// Is this state a member of the goal set?
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Actions to try, in the order they will be tried.
    fn actions(&self) -> &[Self::Action];

    fn transition_model(&self) -> &Self::Model;
}

/// Items which can be ranked by a frontier.
pub trait Prioritized {
    type Priority: Debug + PartialOrd;

    fn priority(&self) -> Self::Priority;
}

impl<T> Prioritized for Rc<T>
where
    T: Prioritized,
{
    type Priority = T::Priority;

    fn priority(&self) -> Self::Priority {
        self.as_ref().priority()
    }
}
