use crate::mdp::MarkovDecisionProcess;
use std::collections::HashMap;

/// An agent that runs a fixed number of batch value-iteration sweeps at
/// construction and then acts greedily on the resulting values.
///
/// Terminal states keep value zero; their payoff is collected through the
/// reward of the transition entering them.
#[derive(Debug)]
pub struct ValueIterationAgent<M: MarkovDecisionProcess> {
    mdp: M,
    discount: f64,
    values: HashMap<M::State, f64>,
}

impl<M: MarkovDecisionProcess> ValueIterationAgent<M> {
    pub fn new(mdp: M, discount: f64, iterations: usize) -> Self {
        assert!((0.0..=1.0).contains(&discount), "the discount must lie in [0, 1]");
        let mut agent = Self {
            mdp,
            discount,
            values: HashMap::new(),
        };
        for _ in 0..iterations {
            agent.sweep();
        }
        agent
    }

    /// One batch sweep: every state's value is recomputed from the
    /// previous sweep's values.
    fn sweep(&mut self) {
        let mut new_values = self.values.clone();
        for state in self.mdp.states() {
            if self.mdp.is_terminal(&state) {
                continue;
            }
            let actions = self.mdp.possible_actions(&state);
            if actions.is_empty() {
                continue;
            }
            let best = actions
                .iter()
                .map(|action| self.q_value(&state, action))
                .fold(f64::NEG_INFINITY, f64::max);
            new_values.insert(state, best);
        }
        self.values = new_values;
    }

    /// The value of `state` as of the last completed sweep.
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.)
    }

    /// The q-value of a state/action pair under the current values.
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transitions(state, action)
            .into_iter()
            .map(|(next_state, probability)| {
                let reward = self.mdp.reward(state, action, &next_state);
                probability * (reward + self.discount * self.value(&next_state))
            })
            .sum()
    }

    /// The best action in `state` under the current values, `None` at
    /// terminal states. Ties go to the first maximum encountered.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        if self.mdp.is_terminal(state) {
            return None;
        }
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.possible_actions(state) {
            let q_value = self.q_value(state, &action);
            let better = match &best {
                Some((_, best_q)) => q_value > *best_q,
                None => true,
            };
            if better {
                best = Some((action, q_value));
            }
        }
        best.map(|(action, _)| action)
    }

    /// The policy at `state`, no exploration.
    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// Two non-terminal states feeding a terminal sink with different
    /// payoffs.
    #[derive(Debug)]
    struct TwoChoices;

    impl MarkovDecisionProcess for TwoChoices {
        type State = &'static str;
        type Action = &'static str;

        fn states(&self) -> Vec<&'static str> {
            vec!["start", "mid", "sink"]
        }

        fn possible_actions(&self, state: &&'static str) -> Vec<&'static str> {
            match *state {
                "start" => vec!["safe", "risky"],
                "mid" => vec!["finish"],
                _ => vec![],
            }
        }

        fn transitions(&self, state: &&'static str, action: &&'static str) -> Vec<(&'static str, f64)> {
            match (*state, *action) {
                ("start", "safe") => vec![("mid", 1.)],
                ("start", "risky") => vec![("sink", 1.)],
                ("mid", "finish") => vec![("sink", 1.)],
                _ => vec![],
            }
        }

        fn reward(&self, state: &&'static str, action: &&'static str, _next: &&'static str) -> f64 {
            match (*state, *action) {
                ("start", "safe") => 0.,
                ("start", "risky") => 1.,
                ("mid", "finish") => 10.,
                _ => 0.,
            }
        }

        fn is_terminal(&self, state: &&'static str) -> bool {
            *state == "sink"
        }
    }

    #[test]
    fn values_converge_to_the_discounted_optimum() {
        let agent = ValueIterationAgent::new(TwoChoices, 0.5, 10);
        assert_approx_eq!(agent.value(&"mid"), 10.);
        // safe: 0 + 0.5 * 10 = 5, risky: 1. The safe route wins.
        assert_approx_eq!(agent.value(&"start"), 5.);
        assert_eq!(agent.policy(&"start"), Some("safe"));
        assert_eq!(agent.action(&"mid"), Some("finish"));
    }

    #[test]
    fn terminal_states_have_no_policy_and_zero_value() {
        let agent = ValueIterationAgent::new(TwoChoices, 0.9, 5);
        assert_eq!(agent.policy(&"sink"), None);
        assert_approx_eq!(agent.value(&"sink"), 0.);
    }

    #[test]
    fn zero_iterations_leave_values_at_zero() {
        let agent = ValueIterationAgent::new(TwoChoices, 0.9, 0);
        assert_approx_eq!(agent.value(&"start"), 0.);
        // With all values zero the immediate reward decides.
        assert_eq!(agent.policy(&"start"), Some("risky"));
    }

    #[test]
    fn q_values_weight_transitions_by_probability() {
        #[derive(Debug)]
        struct Coin;

        impl MarkovDecisionProcess for Coin {
            type State = u8;
            type Action = ();

            fn states(&self) -> Vec<u8> {
                vec![0, 1, 2]
            }

            fn possible_actions(&self, state: &u8) -> Vec<()> {
                if *state == 0 {
                    vec![()]
                } else {
                    vec![]
                }
            }

            fn transitions(&self, _state: &u8, _action: &()) -> Vec<(u8, f64)> {
                vec![(1, 0.25), (2, 0.75)]
            }

            fn reward(&self, _state: &u8, _action: &(), next: &u8) -> f64 {
                if *next == 1 {
                    8.
                } else {
                    0.
                }
            }

            fn is_terminal(&self, state: &u8) -> bool {
                *state != 0
            }
        }

        let agent = ValueIterationAgent::new(Coin, 1.0, 1);
        assert_approx_eq!(agent.q_value(&0, &()), 2.);
        assert_approx_eq!(agent.value(&0), 2.);
    }
}
