use std::fmt;

use super::{argmax, join, Frontier};
use crate::errors::{Result, SearchError};
use crate::traits::Prioritized;

/// A frontier which always yields the item with the *highest*
/// priority (for search nodes, the highest accumulated cost).
///
/// Pushes are appends, and each pop scans the whole queue, so
/// a pop costs O(n). Among equal items, the one pushed first is
/// returned first.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T> {
    queue: Vec<T>,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        PriorityFrontier { queue: Vec::new() }
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.queue.iter()
    }
}

impl<T> Frontier for PriorityFrontier<T>
where
    T: Prioritized,
{
    type Item = T;

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn push(&mut self, item: T) {
        self.queue.push(item);
    }

    fn pop(&mut self) -> Result<T> {
        let index = argmax(&self.queue).ok_or(SearchError::EmptyFrontier)?;
        Ok(self.queue.remove(index))
    }

    fn top(&self) -> Result<&T> {
        let index = argmax(&self.queue).ok_or(SearchError::EmptyFrontier)?;
        Ok(&self.queue[index])
    }
}

impl<T> fmt::Display for PriorityFrontier<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, &self.queue)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frontier::test::Item;

    fn frontier(items: &[(&'static str, f64)]) -> PriorityFrontier<Item> {
        let mut f = PriorityFrontier::new();
        for (name, p) in items {
            f.push(Item(*name, *p));
        }
        f
    }

    #[test]
    fn pop_takes_highest_cost_first() {
        // Highest cost first, unlike a conventional best-first
        // search. Callers rely on this ordering.
        let mut f = frontier(&[("a", 1.0), ("b", 5.0), ("c", 3.0)]);
        assert_eq!(f.pop().unwrap().0, "b");
        assert_eq!(f.pop().unwrap().0, "c");
        assert_eq!(f.pop().unwrap().0, "a");
        assert!(f.is_empty());
    }

    #[test]
    fn popped_item_dominates_remaining() {
        let mut f = frontier(&[
            ("a", 4.0),
            ("b", 0.5),
            ("c", 9.0),
            ("d", 9.0),
            ("e", 2.0),
            ("f", 7.5),
            ("g", 0.0),
            ("h", 3.25),
        ]);

        while !f.is_empty() {
            let popped = f.pop().unwrap();
            assert!(f.iter().all(|rest| popped.1 >= rest.1));
        }
    }

    #[test]
    fn ties_break_by_insertion() {
        let mut f = frontier(&[("a", 2.0), ("b", 2.0), ("c", 1.0), ("d", 2.0)]);
        let order: Vec<_> = (0..4).map(|_| f.pop().unwrap().0).collect();
        assert_eq!(order, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn top_does_not_remove() {
        let f = frontier(&[("a", 1.0), ("b", 5.0)]);
        assert_eq!(f.top().unwrap().0, "b");
        assert_eq!(f.top().unwrap().0, "b");
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn empty_frontier_fails() {
        let mut f: PriorityFrontier<Item> = PriorityFrontier::new();
        assert_eq!(f.top().unwrap_err(), SearchError::EmptyFrontier);
        assert_eq!(f.pop().unwrap_err(), SearchError::EmptyFrontier);
    }

    #[test]
    fn display_joins_items() {
        let f = frontier(&[("a", 1.0), ("b", 5.0)]);
        assert_eq!(f.to_string(), "a b");
    }
}
