//! Shared fixtures for the unit tests.

use crate::blokus::{PieceList, PieceShape};
use crate::search::{Cost, SearchProblem};
use ordered_float::OrderedFloat;
use std::cell::RefCell;
use std::collections::HashSet;

/// A small explicit graph for exercising the search engines directly.
/// Actions are `(from, to)` edge labels.
pub struct GraphProblem {
    pub start: &'static str,
    pub goals: Vec<&'static str>,
    pub edges: Vec<(&'static str, &'static str, f64)>,
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = (&'static str, &'static str);

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, Cost)> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, cost)| (to, (from, to), OrderedFloat(cost)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost {
        actions
            .iter()
            .map(|&(from, to)| {
                self.edges
                    .iter()
                    .find(|&&(f, t, _)| f == from && t == to)
                    .map(|&(_, _, cost)| cost)
                    .expect("actions follow graph edges")
            })
            .sum::<f64>()
            .into()
    }
}

/// Two routes from "a" to "e" through a shared middle state, so frontiers
/// see duplicate states.
pub fn diamond_graph() -> GraphProblem {
    GraphProblem {
        start: "a",
        goals: vec!["e"],
        edges: vec![
            ("a", "b", 1.),
            ("a", "c", 1.),
            ("b", "d", 1.),
            ("c", "d", 1.),
            ("d", "e", 1.),
        ],
    }
}

pub fn line_graph() -> GraphProblem {
    GraphProblem {
        start: "a",
        goals: vec!["c"],
        edges: vec![("a", "b", 1.), ("b", "c", 1.)],
    }
}

/// Wraps a problem and records every state whose successors are asked for,
/// i.e. every expansion.
pub struct RecordingProblem<P: SearchProblem> {
    inner: P,
    expansions: RefCell<Vec<P::State>>,
}

impl<P: SearchProblem> RecordingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expansions: RefCell::new(vec![]),
        }
    }

    pub fn assert_no_duplicate_expansions(&self) {
        let expansions = self.expansions.borrow();
        let distinct: HashSet<_> = expansions.iter().collect();
        assert_eq!(
            distinct.len(),
            expansions.len(),
            "a state was expanded more than once: {expansions:?}"
        );
    }
}

impl<P: SearchProblem> SearchProblem for RecordingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn start_state(&self) -> Self::State {
        self.inner.start_state()
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, Cost)> {
        self.expansions.borrow_mut().push(state.clone());
        self.inner.successors(state)
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost {
        self.inner.cost_of_actions(actions)
    }
}

/// An inventory of `count` one-tile pieces.
pub fn single_tile_pieces(count: usize) -> PieceList {
    let shapes: Vec<PieceShape> = (0..count)
        .map(|i| PieceShape {
            name: format!("S{i}"),
            cells: vec![(0, 0)],
        })
        .collect();
    PieceList::from_shapes(&shapes).expect("fixture piece lists are well formed")
}

/// A domino and a one-tile piece.
pub fn domino_and_single() -> PieceList {
    let shapes = vec![
        PieceShape {
            name: "D2".to_string(),
            cells: vec![(0, 0), (0, 1)],
        },
        PieceShape {
            name: "S1".to_string(),
            cells: vec![(0, 0)],
        },
    ];
    PieceList::from_shapes(&shapes).expect("fixture piece lists are well formed")
}
