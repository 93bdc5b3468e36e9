//! A* search

use crate::search::heuristics::Heuristic;
use crate::search::{Plan, SearchNode, SearchProblem, SearchStatistics};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Expand the node with the lowest cost-so-far plus heuristic estimate
/// first. Optimal whenever the heuristic is admissible; with the zero
/// heuristic this degenerates to uniform cost search, expansion order
/// included.
pub fn a_star_search<P: SearchProblem>(
    problem: &P,
    heuristic: &mut dyn Heuristic<P>,
) -> (Plan<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut frontier = PriorityQueue::new();
    let root = SearchNode::root(problem.start_state());
    let estimate = heuristic.evaluate(root.state(), problem);
    statistics.increment_evaluated_nodes();
    let priority = Reverse(root.cost() + estimate);
    frontier.push(root, priority);
    let mut explored: HashSet<P::State> = HashSet::new();

    while let Some((node, _)) = frontier.pop() {
        if problem.is_goal(node.state()) {
            statistics.finalise_search();
            return (Plan::new(node.into_actions()), statistics);
        }

        if explored.contains(node.state()) {
            continue;
        }
        explored.insert(node.state().clone());
        statistics.increment_expanded_nodes();

        for (successor, action, step_cost) in problem.successors(node.state()) {
            let estimate = heuristic.evaluate(&successor, problem);
            statistics.increment_evaluated_nodes();
            let child = node.extend(successor, action, step_cost);
            let priority = Reverse(child.cost() + estimate);
            statistics.increment_generated_nodes(1);
            frontier.push(child, priority);
        }
    }

    statistics.finalise_search();
    (Plan::empty(), statistics)
}
