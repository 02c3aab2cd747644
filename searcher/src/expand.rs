//! Lazy generation of a node's children.

use std::rc::Rc;

use crate::node::{Node, NodeRef};
use crate::traits::{Problem, TransitionModel};

/// Produce the children of `node`, one per action of `problem`,
/// in action order.
///
/// Children are built as the iterator is advanced. The iterator
/// cannot be rewound; call `expand` again to start over.
pub fn expand<'p, P>(problem: &'p P, node: &NodeRef<P>) -> Expand<'p, P>
where
    P: Problem,
{
    Expand {
        model: problem.transition_model(),
        actions: problem.actions().iter(),
        node: Rc::clone(node),
    }
}

/// Iterator returned by [expand].
#[derive(Debug)]
pub struct Expand<'p, P>
where
    P: Problem,
{
    model: &'p P::Model,
    actions: std::slice::Iter<'p, P::Action>,
    node: NodeRef<P>,
}

impl<'p, P> Iterator for Expand<'p, P>
where
    P: Problem,
{
    type Item = NodeRef<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let action = self.actions.next()?;
        let state = self.node.state();

        let next = self.model.act(state, action);
        let cost = *self.node.cost() + self.model.cost(state, action, &next);

        Some(Rc::new(Node::child(
            &self.node,
            action.clone(),
            next,
            cost,
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.actions.size_hint()
    }
}

impl<'p, P> ExactSizeIterator for Expand<'p, P> where P: Problem {}
