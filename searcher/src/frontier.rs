//! Containers for nodes which have been generated but not yet expanded.
//!
//! The frontier decides the order in which the search visits nodes.

use std::fmt;

use crate::errors::Result;
use crate::traits::Prioritized;

mod fifo;
mod priority;

pub use fifo::FifoFrontier;
pub use priority::PriorityFrontier;

/// Trait used to implement queues of search nodes.
pub trait Frontier: Default {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: Self::Item);

    /// Remove the next item to visit.
    ///
    /// Fails with [SearchError::EmptyFrontier](crate::SearchError::EmptyFrontier)
    /// when there is nothing to remove.
    fn pop(&mut self) -> Result<Self::Item>;

    /// The highest priority item, without removing it.
    fn top(&self) -> Result<&Self::Item>;
}

/// Position of the highest priority item. The first of several
/// equal items wins.
fn argmax<'a, T, I>(items: I) -> Option<usize>
where
    T: Prioritized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<(usize, T::Priority)> = None;
    for (i, item) in items.into_iter().enumerate() {
        let priority = item.priority();
        let replace = match &best {
            Some((_, b)) => priority > *b,
            None => true,
        };
        if replace {
            best = Some((i, priority));
        }
    }
    best.map(|(i, _)| i)
}

fn join<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
