use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::SearchProblem;

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> HeuristicValue {
        (0.).into()
    }
}
