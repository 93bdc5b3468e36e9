//! Depth first search

use crate::search::{Plan, SearchNode, SearchProblem, SearchStatistics};
use std::collections::HashSet;

/// Explore the most recently discovered node first. Finds some plan, not
/// necessarily a cheap one; an empty plan means no goal was reached.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> (Plan<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut stack = vec![SearchNode::root(problem.start_state())];
    let mut visited: HashSet<P::State> = HashSet::new();

    while let Some(node) = stack.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return (Plan::new(node.into_actions()), statistics);
        }

        if visited.contains(node.state()) {
            continue;
        }
        visited.insert(node.state().clone());
        statistics.increment_expanded_nodes();

        for (successor, action, step_cost) in problem.successors(node.state()) {
            // Filtering here only trims the stack. A state can still enter
            // the stack twice before either copy is expanded, which the
            // visited check above catches.
            if !visited.contains(&successor) {
                statistics.increment_generated_nodes(1);
                stack.push(node.extend(successor, action, step_cost));
            }
        }
    }

    statistics.finalise_search();
    (Plan::empty(), statistics)
}
