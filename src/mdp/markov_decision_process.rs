use std::fmt::Debug;
use std::hash::Hash;

/// The contract between a Markov decision process and the agents that
/// solve it. Finite state and action sets only; `transitions` returns an
/// explicit distribution over next states.
pub trait MarkovDecisionProcess {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    /// Every state of the process.
    fn states(&self) -> Vec<Self::State>;

    /// The actions available in `state`. Empty at terminal states.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The `(next state, probability)` distribution of taking `action` in
    /// `state`. Probabilities are non-negative; entries for the same next
    /// state may repeat and are summed by consumers.
    fn transitions(&self, state: &Self::State, action: &Self::Action)
        -> Vec<(Self::State, f64)>;

    /// Reward collected when `action` taken in `state` lands in
    /// `next_state`.
    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
