use crate::search::SearchProblem;
use ordered_float::OrderedFloat;

pub type HeuristicValue = OrderedFloat<f64>;

/// A lower-bound estimate of the remaining cost from a state to the nearest
/// goal of `problem`. A* is only optimal when the estimate never exceeds
/// the true remaining cost; nothing checks this at runtime, an
/// overestimating heuristic silently produces sub-optimal plans.
pub trait Heuristic<P: SearchProblem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;
}
