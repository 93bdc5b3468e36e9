//! Breadth first search

use crate::search::{Plan, SearchNode, SearchProblem, SearchStatistics};
use std::collections::{HashSet, VecDeque};

/// Explore the shallowest nodes first. Optimal in plan length when all
/// step costs are uniform, but not in cost otherwise.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> (Plan<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut queue = VecDeque::new();
    queue.push_back(SearchNode::root(problem.start_state()));
    let mut visited: HashSet<P::State> = HashSet::new();

    while let Some(node) = queue.pop_front() {
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
            if !visited.contains(&successor) {
                statistics.increment_generated_nodes(1);
                queue.push_back(node.extend(successor, action, step_cost));
            }
        }
    }

    statistics.finalise_search();
    (Plan::empty(), statistics)
}
