use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Path and step costs. `OrderedFloat` keeps costs totally ordered and
/// hashable, so frontier entries can carry them.
pub type Cost = OrderedFloat<f64>;

/// The contract between a puzzle and the search engines. The engines only
/// ever see a problem through this trait; puzzle specifics stay behind it.
///
/// Implementations must be internally consistent: every successor is
/// reachable by exactly one action from its predecessor, step costs are
/// non-negative, and `cost_of_actions` agrees with the step costs reported
/// by `successors`. Handing the engines a problem that violates this is a
/// programming error, not a recoverable failure.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Eq + Hash + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal. A pure predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(successor, action, step cost)` triples reachable from `state`
    /// in one action. May be empty when `state` is a dead end.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, Cost)>;

    /// Total cost of executing `actions` in order from the start state.
    /// Used for validation and reporting; the engines accumulate cost
    /// incrementally and never call this.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost;
}
