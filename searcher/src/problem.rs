//! Ready-made problem containers.
//!
//! [SearchProblem] bundles an initial state, a goal set and an action list
//! around any [TransitionModel]. [TransitionTable] is a transition model
//! built from an explicit list of edges.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};
use std::hash::Hash;

use num::Zero;

use crate::traits::{Problem, TransitionModel};

/// A search problem with an explicit goal set.
#[derive(Debug, Clone)]
pub struct SearchProblem<M>
where
    M: TransitionModel,
{
    initial: M::State,
    goal: HashSet<M::State>,
    actions: Vec<M::Action>,
    transition_model: M,
}

impl<M> SearchProblem<M>
where
    M: TransitionModel,
    M::State: Eq + Hash,
{
    pub fn new<G>(initial: M::State, goal: G, actions: Vec<M::Action>, transition_model: M) -> Self
    where
        G: IntoIterator<Item = M::State>,
    {
        Self {
            initial,
            goal: goal.into_iter().collect(),
            actions,
            transition_model,
        }
    }

    pub fn goal(&self) -> &HashSet<M::State> {
        &self.goal
    }

    /// The same problem, starting from a different state.
    pub fn with_initial(mut self, initial: M::State) -> Self {
        self.initial = initial;
        self
    }
}

impl<M> Problem for SearchProblem<M>
where
    M: TransitionModel,
    M::State: Debug + Clone + Eq + Hash,
    M::Action: Debug + Clone,
    M::Cost: Debug + Copy + PartialOrd + Zero,
{
    type State = M::State;
    type Action = M::Action;
    type Cost = M::Cost;
    type Model = M;

    fn initial(&self) -> Self::State {
        self.initial.clone()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goal.contains(state)
    }

    fn actions(&self) -> &[Self::Action] {
        &self.actions
    }

    fn transition_model(&self) -> &Self::Model {
        &self.transition_model
    }
}

impl<M> fmt::Display for SearchProblem<M>
where
    M: TransitionModel + fmt::Display,
    M::State: fmt::Display,
    M::Action: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut goal: Vec<String> = self.goal.iter().map(|s| s.to_string()).collect();
        goal.sort();
        let actions: Vec<String> = self.actions.iter().map(|a| a.to_string()).collect();

        writeln!(f, "Initial: {}", self.initial)?;
        writeln!(f, "Goal: {}", goal.join(" "))?;
        writeln!(f, "Actions: {}", actions.join(" "))?;
        writeln!(f, "Transitions:")?;
        write!(f, "{}", self.transition_model)
    }
}

/// Prices a single transition.
pub trait CostFunction<S, A> {
    type Cost;

    fn cost(&self, state: &S, action: &A, next: &S) -> Self::Cost;
}

/// Every transition costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl<S, A> CostFunction<S, A> for UnitCost {
    type Cost = usize;

    fn cost(&self, _state: &S, _action: &A, _next: &S) -> usize {
        1
    }
}

impl<S, A, C, F> CostFunction<S, A> for F
where
    F: Fn(&S, &A, &S) -> C,
{
    type Cost = C;

    fn cost(&self, state: &S, action: &A, next: &S) -> C {
        self(state, action, next)
    }
}

/// A transition model backed by a list of `(state, action, next)` edges.
///
/// Looking up an action which has no edge from a state leaves the
/// state unchanged. When a state has several edges for the same
/// action, the one inserted first is used.
#[derive(Debug, Clone)]
pub struct TransitionTable<S, A, K = UnitCost> {
    edges: Vec<(S, A, S)>,
    index: HashMap<S, Vec<usize>>,
    cost_function: K,
}

impl<S, A> Default for TransitionTable<S, A, UnitCost> {
    fn default() -> Self {
        Self::with_cost(UnitCost)
    }
}

impl<S, A> TransitionTable<S, A, UnitCost> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, A, K> TransitionTable<S, A, K> {
    pub fn with_cost(cost_function: K) -> Self {
        Self {
            edges: Vec::new(),
            index: HashMap::new(),
            cost_function,
        }
    }

    /// Number of edges in the table.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> std::slice::Iter<'_, (S, A, S)> {
        self.edges.iter()
    }
}

impl<S, A, K> TransitionTable<S, A, K>
where
    S: Clone + Eq + Hash,
    A: PartialEq,
{
    pub fn insert(&mut self, state: S, action: A, next: S) {
        self.index
            .entry(state.clone())
            .or_insert_with(Vec::new)
            .push(self.edges.len());
        self.edges.push((state, action, next));
    }

    /// The state reached from `state` by `action`.
    pub fn transition(&self, state: &S, action: &A) -> S {
        self.index
            .get(state)
            .and_then(|edges| {
                edges
                    .iter()
                    .map(|&i| &self.edges[i])
                    .find(|(_, a, _)| a == action)
            })
            .map(|(_, _, next)| next.clone())
            .unwrap_or_else(|| state.clone())
    }

    /// A table with every edge pointing the other way.
    pub fn reversed(&self) -> Self
    where
        A: Clone,
        K: Clone,
    {
        let mut table = Self::with_cost(self.cost_function.clone());
        for (state, action, next) in self.edges.iter() {
            table.insert(next.clone(), action.clone(), state.clone());
        }
        table
    }
}

impl<S, A, K> Extend<(S, A, S)> for TransitionTable<S, A, K>
where
    S: Clone + Eq + Hash,
    A: PartialEq,
{
    fn extend<I: IntoIterator<Item = (S, A, S)>>(&mut self, iter: I) {
        for (state, action, next) in iter {
            self.insert(state, action, next);
        }
    }
}

impl<S, A, K> TransitionModel for TransitionTable<S, A, K>
where
    S: Clone + Eq + Hash,
    A: PartialEq,
    K: CostFunction<S, A>,
{
    type State = S;
    type Action = A;
    type Cost = K::Cost;

    fn act(&self, state: &S, action: &A) -> S {
        self.transition(state, action)
    }

    fn cost(&self, state: &S, action: &A, next: &S) -> K::Cost {
        self.cost_function.cost(state, action, next)
    }
}

impl<S, A, K> fmt::Display for TransitionTable<S, A, K>
where
    S: fmt::Display,
    A: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (state, action, next) in self.edges.iter() {
            writeln!(f, "{} -{}-> {}", state, action, next)?;
        }
        Ok(())
    }
}
