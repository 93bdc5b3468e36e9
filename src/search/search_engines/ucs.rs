//! Uniform cost search

use crate::search::{Plan, SearchNode, SearchProblem, SearchStatistics};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Expand the cheapest frontier node first. The first goal popped has
/// minimum path cost, provided all step costs are non-negative.
///
/// Successors are pushed without consulting the explored set; a state may
/// therefore sit in the frontier several times with different costs, and
/// only the cheapest copy is ever expanded. Ties are broken by the
/// priority structure's internal order.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> (Plan<P::Action>, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut frontier = PriorityQueue::new();
    let root = SearchNode::root(problem.start_state());
    let priority = Reverse(root.cost());
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
            let child = node.extend(successor, action, step_cost);
            let priority = Reverse(child.cost());
            statistics.increment_generated_nodes(1);
            frontier.push(child, priority);
        }
    }

    statistics.finalise_search();
    (Plan::empty(), statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn finds_the_cheapest_path() {
        // The direct edge is shorter but dearer.
        let problem = GraphProblem {
            start: "a",
            goals: vec!["c"],
            edges: vec![("a", "c", 10.), ("a", "b", 1.), ("b", "c", 1.)],
        };
        let (plan, _) = uniform_cost_search(&problem);
        assert_eq!(plan.steps(), &[("a", "b"), ("b", "c")]);
        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(2.));
    }

    #[test]
    fn revises_a_frontier_cost_before_expansion() {
        // "b" enters the frontier at cost 5 first, then at cost 2. The
        // cheaper copy must win, making the b-route cheaper overall.
        let problem = GraphProblem {
            start: "a",
            goals: vec!["d"],
            edges: vec![
                ("a", "b", 5.),
                ("a", "c", 1.),
                ("c", "b", 1.),
                ("b", "d", 1.),
            ],
        };
        let (plan, _) = uniform_cost_search(&problem);
        assert_eq!(plan.steps(), &[("a", "c"), ("c", "b"), ("b", "d")]);
        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(3.));
    }

    #[test]
    fn returns_empty_plan_when_unreachable() {
        let problem = GraphProblem {
            start: "a",
            goals: vec!["z"],
            edges: vec![("a", "b", 1.)],
        };
        let (plan, _) = uniform_cost_search(&problem);
        assert!(plan.is_empty());
    }

    #[test]
    fn never_expands_a_state_twice() {
        let problem = RecordingProblem::new(diamond_graph());
        let _ = uniform_cost_search(&problem);
        problem.assert_no_duplicate_expansions();
    }
}
