//! Generalized best-first search over state-space problems.
//!
//! To search a problem, implement [Problem] and [TransitionModel] (or
//! build a [SearchProblem] around a [TransitionTable]) and hand it to
//! [best_first_search].
//!
//! The default frontier visits the node with the *highest* accumulated
//! cost first, while the reached map keeps the *cheapest* node found for
//! each state. Searches which want another visiting order can pick a
//! different [Frontier] with [search_with].

pub mod algorithm;
mod errors;
pub mod expand;
pub mod frontier;
pub mod node;
pub mod problem;
mod trace;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Prioritized;
pub use traits::Problem;
pub use traits::TransitionModel;

pub use algorithm::best_first_search;
pub use algorithm::search_with;
pub use algorithm::BestFirst;
pub use algorithm::SearchOptions;
pub use algorithm::Step;
pub use expand::expand;
pub use frontier::{FifoFrontier, Frontier, PriorityFrontier};
pub use node::{Node, NodeRef};
pub use problem::{CostFunction, SearchProblem, TransitionTable, UnitCost};
pub use trace::{ProblemTrace, Trace};
