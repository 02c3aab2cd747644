use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A frontier was asked for an element while it held none.
    #[error("Frontier is empty")]
    EmptyFrontier,

    #[error("No path to a goal state is reachable")]
    NoGoalReachable,

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
