use std::collections::VecDeque;
use std::fmt;

use super::{argmax, join, Frontier};
use crate::errors::{Result, SearchError};
use crate::traits::Prioritized;

/// A first-in, first-out frontier.
///
/// Pops return items in the order they were pushed. Note that
/// [Frontier::top] does *not* peek at the next pop: like
/// [PriorityFrontier](super::PriorityFrontier), it returns the
/// highest priority item.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.queue.iter()
    }
}

impl<T> Frontier for FifoFrontier<T>
where
    T: Prioritized,
{
    type Item = T;

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Result<T> {
        self.queue.pop_front().ok_or(SearchError::EmptyFrontier)
    }

    fn top(&self) -> Result<&T> {
        let index = argmax(&self.queue).ok_or(SearchError::EmptyFrontier)?;
        Ok(&self.queue[index])
    }
}

impl<T> fmt::Display for FifoFrontier<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, &self.queue)
    }
}
