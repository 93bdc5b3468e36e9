use crate::blokus::{Board, Move, PieceList, Position};
use crate::search::{Cost, SearchProblem};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Cover a list of designated target cells. Moves cost as many tiles as
/// they place. The minimum pairwise Manhattan distance between targets is
/// precomputed here once for the cover heuristic.
#[derive(Debug, Clone)]
pub struct BlokusCoverProblem {
    board: Board,
    pieces: PieceList,
    targets: Vec<Position>,
    min_target_distance: f64,
}

impl BlokusCoverProblem {
    pub fn new(
        board_w: u8,
        board_h: u8,
        pieces: PieceList,
        starting_point: Position,
        targets: Vec<Position>,
    ) -> Self {
        assert!(!targets.is_empty(), "cover problems need at least one target");
        assert!(
            targets
                .iter()
                .all(|target| target.row < board_h && target.col < board_w),
            "every target must be on the board"
        );
        let board = Board::new(board_w, board_h, &pieces, starting_point);
        // With fewer than two targets the distance term degenerates to
        // infinity and the heuristic falls back to the piece-size bound.
        let min_target_distance = targets
            .iter()
            .tuple_combinations()
            .map(|(a, b)| f64::from(a.manhattan_distance(b)))
            .fold(f64::INFINITY, f64::min);
        Self {
            board,
            pieces,
            targets,
            min_target_distance,
        }
    }

    pub fn pieces(&self) -> &PieceList {
        &self.pieces
    }

    pub fn targets(&self) -> &[Position] {
        &self.targets
    }

    pub fn min_target_distance(&self) -> f64 {
        self.min_target_distance
    }
}

impl SearchProblem for BlokusCoverProblem {
    type State = Board;
    type Action = Move;

    fn start_state(&self) -> Board {
        self.board.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        self.targets.iter().all(|&target| state.is_covered(target))
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
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::search_engines::{
        a_star_search, breadth_first_search, depth_first_search, uniform_cost_search,
    };
    use crate::test_utils::*;

    #[test]
    fn a_seeded_target_is_satisfied_immediately() {
        // 1x1 board, one single-tile piece, the target doubling as the
        // starting point: every engine must report the empty plan, and the
        // empty plan costs nothing.
        let problem = BlokusCoverProblem::new(
            1,
            1,
            single_tile_pieces(1),
            Position::new(0, 0),
            vec![Position::new(0, 0)],
        );
        assert!(problem.is_goal(&problem.start_state()));

        let (plan, _) = depth_first_search(&problem);
        assert!(plan.is_empty());
        let (plan, _) = breadth_first_search(&problem);
        assert!(plan.is_empty());
        let (plan, _) = uniform_cost_search(&problem);
        assert!(plan.is_empty());
        let (plan, _) = a_star_search(&problem, &mut ZeroHeuristic::new());
        assert!(plan.is_empty());

        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(0.));
    }

    #[test]
    fn min_target_distance_is_precomputed() {
        let problem = BlokusCoverProblem::new(
            4,
            4,
            single_tile_pieces(3),
            Position::new(0, 0),
            vec![
                Position::new(0, 3),
                Position::new(3, 3),
                Position::new(3, 0),
            ],
        );
        assert_eq!(problem.min_target_distance(), 3.);

        let lonely = BlokusCoverProblem::new(
            4,
            4,
            single_tile_pieces(3),
            Position::new(0, 0),
            vec![Position::new(3, 3)],
        );
        assert!(lonely.min_target_distance().is_infinite());
    }

    #[test]
    fn ucs_covers_a_single_target_optimally() {
        let problem = BlokusCoverProblem::new(
            3,
            3,
            single_tile_pieces(2),
            Position::new(0, 0),
            vec![Position::new(1, 1)],
        );
        let (plan, _) = uniform_cost_search(&problem);
        assert_eq!(plan.len(), 1);
        assert_eq!(problem.cost_of_actions(&plan), OrderedFloat(1.));
    }
}
