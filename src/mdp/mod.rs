mod gridworld;
mod markov_decision_process;
mod value_iteration;

pub use gridworld::{Cell, Direction, GridWorld};
pub use markov_decision_process::MarkovDecisionProcess;
pub use value_iteration::ValueIterationAgent;
