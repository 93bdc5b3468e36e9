use crate::blokus::{Move, PieceList, Position};
use smallvec::SmallVec;

/// A one-player Blokus board: occupancy grid plus remaining piece
/// inventory. Boards are value types from the search engine's perspective:
/// applying a move yields a new board, and two boards with the same
/// occupancy and inventory compare and hash alike.
///
/// The board is seeded with a single tile at its starting point. Every
/// placement must share a corner with an occupied cell and may not share
/// an edge with one, so play chains diagonally out of the seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    grid: Vec<bool>,
    remaining: Vec<bool>,
}

impl Board {
    pub fn new(width: u8, height: u8, pieces: &PieceList, starting_point: Position) -> Self {
        assert!(width >= 1 && height >= 1, "the board must have at least one cell");
        assert!(
            starting_point.row < height && starting_point.col < width,
            "the starting point must be on the board"
        );
        let mut grid = vec![false; usize::from(width) * usize::from(height)];
        grid[Self::index_of(width, starting_point)] = true;
        Self {
            width,
            height,
            grid,
            remaining: vec![true; pieces.len()],
        }
    }

    fn index_of(width: u8, position: Position) -> usize {
        usize::from(position.row) * usize::from(width) + usize::from(position.col)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn is_covered(&self, position: Position) -> bool {
        assert!(
            position.row < self.height && position.col < self.width,
            "the queried cell must be on the board"
        );
        self.grid[Self::index_of(self.width, position)]
    }

    pub fn piece_remaining(&self, piece: usize) -> bool {
        self.remaining[piece]
    }

    pub fn has_pieces_remaining(&self) -> bool {
        self.remaining.iter().any(|&remaining| remaining)
    }

    /// Occupancy with out-of-board coordinates reading as free.
    fn occupied(&self, row: i16, col: i16) -> bool {
        row >= 0
            && col >= 0
            && row < i16::from(self.height)
            && col < i16::from(self.width)
            && self.grid[usize::try_from(row).expect("row is non-negative")
                * usize::from(self.width)
                + usize::try_from(col).expect("col is non-negative")]
    }

    /// Whether `mv` may be played on this board: its piece is still in the
    /// inventory, its cells are on the board and free, no cell shares an
    /// edge with an occupied cell, and at least one shares a corner.
    pub fn is_legal(&self, mv: &Move) -> bool {
        if !self.remaining.get(mv.piece_index()).copied().unwrap_or(false) {
            return false;
        }
        let mut touches_corner = false;
        for &cell in mv.cells() {
            if cell.row >= self.height || cell.col >= self.width {
                return false;
            }
            if self.is_covered(cell) {
                return false;
            }
            let (row, col) = (i16::from(cell.row), i16::from(cell.col));
            if self.occupied(row - 1, col)
                || self.occupied(row + 1, col)
                || self.occupied(row, col - 1)
                || self.occupied(row, col + 1)
            {
                return false;
            }
            touches_corner = touches_corner
                || self.occupied(row - 1, col - 1)
                || self.occupied(row - 1, col + 1)
                || self.occupied(row + 1, col - 1)
                || self.occupied(row + 1, col + 1);
        }
        touches_corner
    }

    /// Every legal placement of every remaining piece.
    pub fn legal_moves(&self, pieces: &PieceList) -> Vec<Move> {
        let mut moves = Vec::new();
        for (piece_index, piece) in pieces.iter().enumerate() {
            if !self.remaining[piece_index] {
                continue;
            }
            for orientation in piece.orientations() {
                if orientation.height() > self.height || orientation.width() > self.width {
                    continue;
                }
                for row in 0..=self.height - orientation.height() {
                    for col in 0..=self.width - orientation.width() {
                        let cells: SmallVec<[Position; 8]> = orientation
                            .cells()
                            .iter()
                            .map(|&(dr, dc)| Position::new(row + dr, col + dc))
                            .collect();
                        let mv = Move::new(piece_index, cells);
                        if self.is_legal(&mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }

    /// Play `mv`, producing the successor board. Legality is the caller's
    /// contract.
    pub fn apply(&self, mv: &Move) -> Board {
        debug_assert!(self.is_legal(mv), "moves applied to a board must be legal");
        let mut next = self.clone();
        for &cell in mv.cells() {
            next.grid[Self::index_of(next.width, cell)] = true;
        }
        next.remaining[mv.piece_index()] = false;
        next
    }
}
