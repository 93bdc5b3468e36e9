use crate::blokus::{Board, Move, PieceList, Position};
use crate::search::{Cost, SearchProblem};
use ordered_float::OrderedFloat;

/// A one-player Blokus game: play out the entire piece inventory. Every
/// move costs 1, so plans are measured in moves.
#[derive(Debug, Clone)]
pub struct BlokusFillProblem {
    board: Board,
    pieces: PieceList,
}

impl BlokusFillProblem {
    pub fn new(board_w: u8, board_h: u8, pieces: PieceList, starting_point: Position) -> Self {
        let board = Board::new(board_w, board_h, &pieces, starting_point);
        Self { board, pieces }
    }

    pub fn pieces(&self) -> &PieceList {
        &self.pieces
    }
}

impl SearchProblem for BlokusFillProblem {
    type State = Board;
    type Action = Move;

    fn start_state(&self) -> Board {
        self.board.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        !state.has_pieces_remaining()
    }

    fn successors(&self, state: &Board) -> Vec<(Board, Move, Cost)> {
        state
            .legal_moves(&self.pieces)
            .into_iter()
            .map(|mv| (state.apply(&mv), mv, OrderedFloat(1.)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Move]) -> Cost {
        OrderedFloat(actions.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::depth_first_search;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn goal_is_an_empty_inventory() {
        let problem = BlokusFillProblem::new(3, 3, single_tile_pieces(1), Position::new(0, 0));
        let start = problem.start_state();
        assert!(!problem.is_goal(&start));

        let (board, _, _) = problem.successors(&start).pop().unwrap();
        assert!(problem.is_goal(&board));
    }

    #[test]
    fn dfs_plays_out_the_inventory() {
        let problem = BlokusFillProblem::new(4, 4, single_tile_pieces(2), Position::new(0, 0));
        let (plan, _) = depth_first_search(&problem);
        assert_eq!(plan.len(), 2);
        assert!(validate(&problem, &plan).is_ok());
        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(2.));
    }
}
