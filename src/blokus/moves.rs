use crate::blokus::Position;
use smallvec::SmallVec;
use std::fmt;

/// A single placement: which piece, and the absolute cells it covers. The
/// cell list makes the move's cost attribute (its tile count) recoverable
/// without consulting any board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    piece: usize,
    cells: SmallVec<[Position; 8]>,
}

impl Move {
    pub fn new(piece: usize, cells: SmallVec<[Position; 8]>) -> Self {
        debug_assert!(!cells.is_empty(), "moves cover at least one cell");
        Self { piece, cells }
    }

    pub fn piece_index(&self) -> usize {
        self.piece
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn num_tiles(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {} ->", self.piece)?;
        for cell in &self.cells {
            write!(f, " ({cell})")?;
        }
        Ok(())
    }
}
