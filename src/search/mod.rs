pub mod heuristics;
pub mod search_engines;

mod plan;
mod search_node;
mod search_problem;
mod search_statistics;
mod validate;
mod verbosity;

pub use plan::Plan;
pub use search_node::SearchNode;
pub use search_problem::{Cost, SearchProblem};
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
