use crate::blokus::{Board, Move, PieceList, Position};
use crate::search::{Cost, SearchProblem};
use ordered_float::OrderedFloat;

/// Cover all four board corners. Moves cost as many tiles as they place,
/// so cheap plans prefer small pieces.
#[derive(Debug, Clone)]
pub struct BlokusCornersProblem {
    board: Board,
    pieces: PieceList,
    corners: [Position; 4],
}

impl BlokusCornersProblem {
    pub fn new(board_w: u8, board_h: u8, pieces: PieceList, starting_point: Position) -> Self {
        let board = Board::new(board_w, board_h, &pieces, starting_point);
        let corners = [
            Position::new(0, 0),
            Position::new(board_h - 1, 0),
            Position::new(0, board_w - 1),
            Position::new(board_h - 1, board_w - 1),
        ];
        Self {
            board,
            pieces,
            corners,
        }
    }

    pub fn pieces(&self) -> &PieceList {
        &self.pieces
    }

    pub fn corners(&self) -> &[Position] {
        &self.corners
    }
}

impl SearchProblem for BlokusCornersProblem {
    type State = Board;
    type Action = Move;

    fn start_state(&self) -> Board {
        self.board.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        self.corners.iter().all(|&corner| state.is_covered(corner))
    }

    fn successors(&self, state: &Board) -> Vec<(Board, Move, Cost)> {
        state
            .legal_moves(&self.pieces)
            .into_iter()
            .map(|mv| {
                let cost = OrderedFloat(mv.num_tiles() as f64);
                (state.apply(&mv), mv, cost)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Move]) -> Cost {
        OrderedFloat(actions.iter().map(Move::num_tiles).sum::<usize>() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::uniform_cost_search;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn goal_requires_all_four_corners() {
        let problem = BlokusCornersProblem::new(3, 3, single_tile_pieces(5), Position::new(0, 0));
        let start = problem.start_state();
        // The seed covers (0, 0) already; three corners remain.
        assert!(start.is_covered(Position::new(0, 0)));
        assert!(!problem.is_goal(&start));
    }

    #[test]
    fn ucs_finds_the_cheapest_corner_cover() {
        // From the seeded corner the other three corners are reachable only
        // through the centre relay, so the optimum is four single tiles.
        let problem = BlokusCornersProblem::new(3, 3, single_tile_pieces(5), Position::new(0, 0));
        let (plan, _) = uniform_cost_search(&problem);
        assert!(validate(&problem, &plan).is_ok());
        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(4.));
    }
}
