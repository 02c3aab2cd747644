//! The best-first search driver.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, info, trace};

use crate::errors::{Result, SearchError};
use crate::expand::expand;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::node::{Node, NodeRef};
use crate::trace::{ProblemTrace, Trace};
use crate::traits::Problem;

/// Options which adjust how a search runs.
///
/// The defaults impose no limit and log nothing beyond debug output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up after this many nodes have been visited.
    ///
    /// The check happens before each visit, so `Some(0)` fails with
    /// [SearchError::StepLimitExhausted] before even the initial state
    /// is looked at.
    pub limit: Option<usize>,

    /// Log a progress line every this many nodes.
    pub verbose: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        if self.current >= self.maximum {
            return Err(SearchError::StepLimitExhausted(self.current));
        }
        self.current += 1;
        Ok(())
    }
}

/// Outcome of a single iteration of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The node just visited is a goal.
    Goal,

    /// The node just visited was expanded, and `admitted` of its
    /// children were added to the frontier.
    Expanded { admitted: usize },

    /// The frontier is empty.
    Exhausted,
}

/// Best-first search over a [Problem], using frontier `F`.
///
/// The driver keeps a map from each state to the best node known to
/// reach it. A child is added to the frontier only when its state is
/// new, or when it reaches a known state more cheaply than before.
pub struct BestFirst<'p, P, F>
where
    P: Problem,
    F: Frontier<Item = NodeRef<P>>,
{
    problem: &'p P,
    frontier: F,
    reached: HashMap<P::State, NodeRef<P>>,
    visited: Vec<NodeRef<P>>,
    counter: Option<StepLimit>,
    verbose: Option<usize>,
    reported: usize,
}

/// The default searcher, which visits the highest cost node first.
pub type BestFirstSearcher<'p, P> = BestFirst<'p, P, PriorityFrontier<NodeRef<P>>>;

impl<'p, P, F> BestFirst<'p, P, F>
where
    P: Problem,
    F: Frontier<Item = NodeRef<P>>,
{
    /// Prepare a search from the problem's initial state.
    pub fn new(problem: &'p P) -> Self {
        let initial = problem.initial();
        let root = Rc::new(Node::root(initial.clone()));

        let mut frontier = F::default();
        frontier.push(Rc::clone(&root));

        let mut reached = HashMap::new();
        reached.insert(initial, root);

        Self {
            problem,
            frontier,
            reached,
            visited: Vec::new(),
            counter: None,
            verbose: None,
            reported: 0,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.counter = options.limit.map(StepLimit::new);
        self.verbose = options.verbose.filter(|&n| n > 0);
        self
    }

    /// Set a step limit for this search.
    ///
    /// When this many nodes have been visited, the next step will
    /// return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    pub fn problem(&self) -> &'p P {
        self.problem
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    /// The best node found so far for each state.
    pub fn reached(&self) -> &HashMap<P::State, NodeRef<P>> {
        &self.reached
    }

    /// Nodes removed from the frontier so far, in order.
    pub fn visited(&self) -> &[NodeRef<P>] {
        &self.visited
    }

    /// Should this child go on the frontier?
    fn admit(&mut self, child: &NodeRef<P>) -> bool {
        let better = match self.reached.get(child.state()) {
            None => true,
            Some(known) => child.cost() < known.cost(),
        };

        if better {
            self.reached
                .insert(child.state().clone(), Rc::clone(child));
        }
        better
    }

    /// Log a progress line if this visit falls on the verbose cadence.
    fn report(&mut self, node: &NodeRef<P>) {
        let n = self.visited.len();
        match self.verbose {
            Some(every) if n % every == 0 => {
                info!(
                    "F{} R{} S{:?} C{:?} {}",
                    self.frontier.len(),
                    self.reached.len(),
                    node.state(),
                    node.cost(),
                    n
                );
                self.reported += 1;
            }
            _ => {}
        }
    }

    /// Visit the next node on the frontier.
    pub fn step(&mut self) -> Result<Step> {
        if self.frontier.is_empty() {
            return Ok(Step::Exhausted);
        }

        if let Some(counter) = self.counter.as_mut() {
            counter.increment()?;
        }

        let node = self.frontier.pop()?;
        self.visited.push(Rc::clone(&node));

        let n = self.visited.len();
        self.report(&node);

        if self.problem.is_goal(node.state()) {
            debug!(
                "Reached goal {:?} at cost {:?} after {} steps",
                node.state(),
                node.cost(),
                n
            );
            return Ok(Step::Goal);
        }

        let mut admitted = 0;
        for child in expand(self.problem, &node) {
            if self.admit(&child) {
                trace!("Admit {:?} at cost {:?}", child.state(), child.cost());
                self.frontier.push(child);
                admitted += 1;
            }
        }

        Ok(Step::Expanded { admitted })
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Result<ProblemTrace<P>> {
        loop {
            match self.step()? {
                Step::Goal => return Ok(Trace::new(self.visited)),
                Step::Expanded { .. } => {}
                Step::Exhausted => {
                    debug!(
                        "Frontier exhausted after {} steps, {} states reached",
                        self.visited.len(),
                        self.reached.len()
                    );
                    return Err(SearchError::NoGoalReachable);
                }
            }
        }
    }
}

impl<'p, P, F> fmt::Debug for BestFirst<'p, P, F>
where
    P: Problem,
    F: Frontier<Item = NodeRef<P>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BestFirst")
            .field("frontier", &self.frontier.len())
            .field("reached", &self.reached.len())
            .field("visited", &self.visited.len())
            .field("counter", &self.counter)
            .field("reported", &self.reported)
            .finish()
    }
}

/// Build the default best-first searcher.
pub fn build<P>(problem: &P) -> BestFirstSearcher<'_, P>
where
    P: Problem,
{
    BestFirst::new(problem)
}

/// Search `problem`, visiting the highest cost node on the frontier first.
///
/// On success, returns every node visited up to and including the
/// first goal. Fails with [SearchError::NoGoalReachable] when the
/// frontier runs dry first.
pub fn best_first_search<P>(problem: &P) -> Result<ProblemTrace<P>>
where
    P: Problem,
{
    build(problem).run()
}

/// Search `problem` using the frontier `F`.
pub fn search_with<F, P>(problem: &P, options: SearchOptions) -> Result<ProblemTrace<P>>
where
    P: Problem,
    F: Frontier<Item = NodeRef<P>>,
{
    BestFirst::<P, F>::new(problem).with_options(options).run()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::frontier::FifoFrontier;
    use crate::problem::helpers::{graph, Graph};
    use crate::problem::{SearchProblem, TransitionTable};
    use crate::traits::TransitionModel;

    fn states<P: Problem>(nodes: &[NodeRef<P>]) -> Vec<P::State> {
        nodes.iter().map(|n| n.state().clone()).collect()
    }

    fn diamond() -> Graph {
        graph(
            "a",
            &["d"],
            "
            a x b 2
            a y c 5
            b x d 1
            c y d 1
            ",
        )
    }

    #[test]
    fn initial_goal_visits_only_root() {
        let problem = diamond().with_initial("d".to_string());
        let trace = best_first_search(&problem).unwrap();

        assert_eq!(trace.len(), 1);
        let root = trace.goal().unwrap();
        assert!(root.is_root());
        assert_eq!(root.state(), "d");
        assert_eq!(*root.cost(), 0);
    }

    #[test]
    fn visits_most_expensive_first() {
        let trace = best_first_search(&diamond()).unwrap();

        // c (cost 5) is popped before b (cost 2), and d via c (cost 6)
        // is admitted before d via b is ever generated.
        assert_eq!(states::<Graph>(trace.nodes()), vec!["a", "c", "d"]);
        assert_eq!(*trace.goal().unwrap().cost(), 6);
        assert_eq!(trace.solution(), vec!['y', 'y']);
    }

    #[test]
    fn trace_costs_accumulate_along_parents() {
        let problem = graph(
            "s",
            &["g"],
            "
            s a t 3
            s b u 1
            t a g 4
            u b t 1
            u a g 9
            t b s 2
            ",
        );
        let trace = best_first_search(&problem).unwrap();
        let model = problem.transition_model();

        for node in trace.iter() {
            let mut expected = 0;
            let mut current = Rc::clone(node);
            while let Some(parent) = current.parent().cloned() {
                let action = current.action().unwrap();
                expected += model.cost(parent.state(), action, current.state());
                current = parent;
            }
            assert_eq!(*node.cost(), expected, "cost of {:?}", node.state());
        }
    }

    #[test]
    fn cheaper_path_replaces_reached_entry() {
        let problem = graph(
            "a",
            &[],
            "
            a x b 1
            a y c 10
            b y c 1
            ",
        );
        let mut search = build(&problem);

        assert_eq!(search.step(), Ok(Step::Expanded { admitted: 2 }));
        assert_eq!(*search.reached()["c"].cost(), 10);

        // c is popped first, then b finds c for 2, which is cheaper.
        assert_eq!(search.step(), Ok(Step::Expanded { admitted: 0 }));
        assert_eq!(search.step(), Ok(Step::Expanded { admitted: 1 }));
        assert_eq!(*search.reached()["c"].cost(), 2);
        assert_eq!(search.reached().len(), 3);
    }

    #[test]
    fn reached_holds_one_entry_per_state() {
        let problem = graph(
            "a",
            &["z"],
            "
            a x b 1
            a y c 2
            b x c 1
            b y a 1
            c x a 1
            c y b 5
            ",
        );
        let mut search = build(&problem);

        loop {
            let step = search.step().unwrap();
            let mut seen = HashSet::new();
            for (state, node) in search.reached() {
                assert_eq!(state, node.state());
                assert!(seen.insert(state.clone()));
            }
            assert!(search.reached().len() <= 3);
            if step == Step::Exhausted {
                break;
            }
        }
    }

    #[test]
    fn empty_goal_exhausts_every_state_once() {
        let problem = graph(
            "a",
            &[],
            "
            a x b
            b x c
            c x a
            c y d
            ",
        );
        let mut search = build(&problem);
        while search.step().unwrap() != Step::Exhausted {}

        let mut visited = states::<Graph>(search.visited());
        visited.sort();
        assert_eq!(visited, vec!["a", "b", "c", "d"]);

        assert_eq!(
            best_first_search(&problem).unwrap_err(),
            SearchError::NoGoalReachable
        );
    }

    #[test]
    fn disconnected_goal_is_unreachable() {
        let problem = graph(
            "a",
            &["island"],
            "
            a x b
            b x a
            island x island
            ",
        );
        let mut search = build(&problem);
        while search.step().unwrap() != Step::Exhausted {}

        let mut visited = states::<Graph>(search.visited());
        visited.sort();
        assert_eq!(visited, vec!["a", "b"]);
        assert!(!search.reached().contains_key("island"));
        assert_eq!(
            best_first_search(&problem).unwrap_err(),
            SearchError::NoGoalReachable
        );
    }

    #[test]
    fn fifo_frontier_visits_in_generation_order() {
        let problem = graph(
            "a",
            &["e"],
            "
            a x b 5
            a y c 1
            b x d 1
            c y e 1
            ",
        );
        let trace = search_with::<FifoFrontier<_>, _>(&problem, SearchOptions::default()).unwrap();
        assert_eq!(states::<Graph>(trace.nodes()), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(trace.solution(), vec!['y', 'y']);
    }

    #[test]
    fn step_limit() {
        let problem = graph(
            "a",
            &[],
            "
            a x b
            b x c
            c x d
            ",
        );
        let options = SearchOptions {
            limit: Some(2),
            verbose: Some(1),
        };
        let err = search_with::<PriorityFrontier<_>, _>(&problem, options).unwrap_err();
        assert_eq!(err, SearchError::StepLimitExhausted(2));

        let options = SearchOptions {
            limit: Some(4),
            verbose: None,
        };
        let err = search_with::<PriorityFrontier<_>, _>(&problem, options).unwrap_err();
        assert_eq!(err, SearchError::NoGoalReachable);
    }

    #[test]
    fn zero_limit_fails_before_root() {
        let problem = graph("a", &["a"], "a x b");
        let options = SearchOptions {
            limit: Some(0),
            verbose: None,
        };
        let err = search_with::<PriorityFrontier<_>, _>(&problem, options).unwrap_err();
        assert_eq!(err, SearchError::StepLimitExhausted(0));

        let mut searcher = build(&problem);
        searcher.set_limit(0);
        assert_eq!(searcher.step(), Err(SearchError::StepLimitExhausted(0)));
        assert!(searcher.visited().is_empty());
    }

    #[test]
    fn verbose_reports_every_nth_visit() {
        let problem = graph(
            "a",
            &[],
            "
            a x b
            b x c
            c x d
            d x e
            e x f
            f x g
            g x h
            ",
        );
        let options = SearchOptions {
            limit: None,
            verbose: Some(3),
        };
        let mut searcher = build(&problem).with_options(options);
        while searcher.step().unwrap() != Step::Exhausted {}
        assert_eq!(searcher.visited().len(), 8);
        assert_eq!(searcher.reported, 2);

        let mut quiet = build(&problem).with_options(SearchOptions {
            limit: None,
            verbose: Some(0),
        });
        while quiet.step().unwrap() != Step::Exhausted {}
        assert_eq!(quiet.reported, 0);
    }

    fn line(n: u32) -> SearchProblem<TransitionTable<u32, char>> {
        let mut table = TransitionTable::new();
        table.extend((0..n).map(|i| (i, 'x', i + 1)));
        SearchProblem::new(0, vec![n], vec!['x'], table)
    }

    #[test]
    fn deep_trace_drops_cleanly() {
        let problem = line(200_000);
        let trace = best_first_search(&problem).unwrap();
        assert_eq!(trace.nodes().len(), 200_001);

        let goal = trace.goal().unwrap();
        assert_eq!(*goal.cost(), 200_000);
        assert_eq!(goal.depth(), 200_000);

        let root = Rc::downgrade(&trace.nodes()[0]);
        assert!(root.upgrade().is_some());
        drop(trace);
        assert!(root.upgrade().is_none());
    }

    #[test]
    fn path_walks_back_to_root() {
        let trace = best_first_search(&diamond()).unwrap();
        let path = trace.path();

        assert_eq!(states::<Graph>(&path), vec!["a", "c", "d"]);
        assert!(path[0].is_root());
        assert!(Rc::ptr_eq(&path[2], trace.goal().unwrap()));
    }
}
