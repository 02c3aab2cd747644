use std::rc::Rc;

use crate::node::{self, Node};
use crate::traits::Problem;

/// Trace for the given problem type.
pub type ProblemTrace<P> =
    Trace<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// Every node removed from the frontier during a search, in the
/// order they were removed.
///
/// A successful search ends with the goal node. The trace is a record
/// of the whole search, not the solution: use [Trace::path] or
/// [Trace::solution] to follow the goal back to the root.
#[derive(Debug, Clone)]
pub struct Trace<S, A, C> {
    nodes: Vec<Rc<Node<S, A, C>>>,
}

impl<S, A, C> Trace<S, A, C> {
    pub(crate) fn new(nodes: Vec<Rc<Node<S, A, C>>>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Rc<Node<S, A, C>>] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Node<S, A, C>>> {
        self.nodes.iter()
    }

    /// The last node visited.
    pub fn goal(&self) -> Option<&Rc<Node<S, A, C>>> {
        self.nodes.last()
    }

    /// Nodes from the root to the goal.
    pub fn path(&self) -> Vec<Rc<Node<S, A, C>>> {
        self.goal().map(node::path).unwrap_or_default()
    }

    /// Actions from the root to the goal.
    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.goal()
            .map(|g| g.solution().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn into_nodes(self) -> Vec<Rc<Node<S, A, C>>> {
        self.nodes
    }
}

impl<S, A, C> IntoIterator for Trace<S, A, C> {
    type Item = Rc<Node<S, A, C>>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'t, S, A, C> IntoIterator for &'t Trace<S, A, C> {
    type Item = &'t Rc<Node<S, A, C>>;
    type IntoIter = std::slice::Iter<'t, Rc<Node<S, A, C>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
