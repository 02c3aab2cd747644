//! Search nodes and their parent chains.

use std::fmt;
use std::mem;
use std::rc::Rc;

use num::Zero;

use crate::traits::{Prioritized, Problem};

/// A node for the given problem type.
pub type ProblemNode<P> = Node<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// Shared handle to a node for the given problem type.
pub type NodeRef<P> = Rc<ProblemNode<P>>;

/// A point in the search space, along with how we got there.
///
/// Nodes are never modified once built. Each child holds a
/// shared reference to its parent, and parents know nothing
/// about their children, so a chain of nodes can never form
/// a cycle and is released when the last child is dropped.
#[derive(Debug, Clone)]
pub struct Node<S, A, C> {
    state: S,
    parent: Option<Rc<Node<S, A, C>>>,
    action: Option<A>,
    cost: C,
}

impl<S, A, C> Node<S, A, C>
where
    C: Zero,
{
    /// The node at the start of every search: no parent, no action
    /// and zero cost.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            cost: C::zero(),
        }
    }
}

impl<S, A, C> Node<S, A, C> {
    /// A node reached from `parent` by `action`.
    ///
    /// `cost` is the total path cost, not the cost of the last step.
    pub fn child(parent: &Rc<Self>, action: A, state: S, cost: C) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            cost,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn cost(&self) -> &C {
        &self.cost
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of steps from the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterate over this node's parents, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_, S, A, C> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Actions taken from the root to reach this node.
    pub fn solution(&self) -> Vec<&A> {
        let mut actions: Vec<&A> = self.action.iter().collect();
        actions.extend(self.ancestors().filter_map(|n| n.action.as_ref()));
        actions.reverse();
        actions
    }
}

/// The nodes from the root to `node`, inclusive.
pub fn path<S, A, C>(node: &Rc<Node<S, A, C>>) -> Vec<Rc<Node<S, A, C>>> {
    let mut nodes = vec![Rc::clone(node)];
    let mut current = node.parent.clone();
    while let Some(n) = current {
        current = n.parent.clone();
        nodes.push(n);
    }
    nodes.reverse();
    nodes
}

/// Iterator over the parent chain of a node.
#[derive(Debug)]
pub struct Ancestors<'n, S, A, C> {
    next: Option<&'n Node<S, A, C>>,
}

impl<'n, S, A, C> Iterator for Ancestors<'n, S, A, C> {
    type Item = &'n Node<S, A, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent.as_deref();
        Some(node)
    }
}

// Unlink ancestors one at a time; the derived drop would recurse once per
// level and overflow the stack on deep chains.
impl<S, A, C> Drop for Node<S, A, C> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = mem::take(&mut node.parent),
                Err(_) => break,
            }
        }
    }
}

impl<S, A, C> Prioritized for Node<S, A, C>
where
    C: fmt::Debug + Copy + PartialOrd,
{
    type Priority = C;

    fn priority(&self) -> C {
        self.cost
    }
}

impl<S, A, C> fmt::Display for Node<S, A, C>
where
    S: fmt::Display,
    A: fmt::Display,
    C: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.parent, &self.action) {
            (Some(parent), Some(action)) => write!(
                f,
                "State: {}, Action: {}, Parent: {}, Cost: {}",
                self.state, action, parent.state, self.cost
            ),
            _ => write!(f, "State: {}, Cost: {}", self.state, self.cost),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type TestNode = Node<&'static str, char, u32>;

    fn chain() -> Rc<TestNode> {
        let root = Rc::new(TestNode::root("a"));
        let b = Rc::new(Node::child(&root, 'x', "b", 2));
        Rc::new(Node::child(&b, 'y', "c", 5))
    }

    #[test]
    fn root_has_no_parent() {
        let root = TestNode::root("a");
        assert!(root.is_root());
        assert_eq!(root.action(), None);
        assert_eq!(*root.cost(), 0);
        assert_eq!(root.depth(), 0);
        assert!(root.solution().is_empty());
    }

    #[test]
    fn child_extends_chain() {
        let c = chain();
        assert_eq!(*c.state(), "c");
        assert_eq!(c.action(), Some(&'y'));
        assert_eq!(c.parent().map(|p| *p.state()), Some("b"));
        assert_eq!(c.depth(), 2);
        assert_eq!(c.solution(), vec![&'x', &'y']);
    }

    #[test]
    fn child_does_not_consume_parent() {
        let root = Rc::new(TestNode::root("a"));
        let _left = Node::child(&root, 'l', "l", 1);
        let _right = Node::child(&root, 'r', "r", 1);
        assert_eq!(Rc::strong_count(&root), 3);
        assert!(root.is_root());
    }

    #[test]
    fn dropping_tail_frees_chain() {
        let root = Rc::new(TestNode::root("root"));
        let weak = Rc::downgrade(&root);

        let mut tail = root;
        for i in 0..200_000 {
            tail = Rc::new(Node::child(&tail, 'x', "next", i));
        }
        assert!(weak.upgrade().is_some());

        drop(tail);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn shared_ancestors_survive_drop() {
        let root = Rc::new(TestNode::root("a"));
        let b = Rc::new(Node::child(&root, 'x', "b", 1));
        let c = Rc::new(Node::child(&b, 'y', "c", 2));
        let weak_b = Rc::downgrade(&b);
        drop(b);

        let d = Rc::new(Node::child(&c, 'z', "d", 3));
        drop(c);
        assert_eq!(d.depth(), 3);
        assert!(weak_b.upgrade().is_some());

        drop(d);
        assert!(weak_b.upgrade().is_none());
        assert_eq!(Rc::strong_count(&root), 1);
    }

    #[test]
    fn path_runs_root_to_node() {
        let c = chain();
        let states: Vec<_> = path(&c).iter().map(|n| *n.state()).collect();
        assert_eq!(states, vec!["a", "b", "c"]);
    }

    #[test]
    fn display() {
        let c = chain();
        assert_eq!(
            c.to_string(),
            "State: c, Action: y, Parent: b, Cost: 5"
        );
        assert_eq!(TestNode::root("a").to_string(), "State: a, Cost: 0");
    }
}
