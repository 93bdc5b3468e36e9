//! Pieces and piece inventories. A piece is described once, in any
//! orientation; every distinct rotation and reflection is precomputed at
//! construction so move generation only has to slide orientations across
//! the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

const STANDARD_PIECES_RON: &str = include_str!("../../data/standard_pieces.ron");

/// A piece shape as written in inventory files: a name and the piece's
/// cells as `(row, col)` offsets, in any orientation and translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceShape {
    pub name: String,
    pub cells: Vec<(i16, i16)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PieceFile {
    pieces: Vec<PieceShape>,
}

#[derive(Debug, Error)]
pub enum PieceListError {
    #[error("failed to read piece file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse piece file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("piece list contains no pieces")]
    Empty,
    #[error("piece `{name}` has no cells")]
    EmptyPiece { name: String },
    #[error("piece `{name}` repeats the cell ({row}, {col})")]
    DuplicateCell { name: String, row: i16, col: i16 },
    #[error("piece `{name}` does not fit on any board")]
    TooLarge { name: String },
}

/// One distinct orientation of a piece, cells normalised against the
/// top-left of its bounding box and sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    cells: SmallVec<[(u8, u8); 8]>,
    height: u8,
    width: u8,
}

impl Orientation {
    fn from_normalised(cells: &[(i16, i16)]) -> Self {
        let height = cells.iter().map(|cell| cell.0).max().expect("pieces are never empty") + 1;
        let width = cells.iter().map(|cell| cell.1).max().expect("pieces are never empty") + 1;
        Self {
            cells: cells
                .iter()
                .map(|&(row, col)| (row as u8, col as u8))
                .collect(),
            height: height as u8,
            width: width as u8,
        }
    }

    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    name: String,
    num_tiles: usize,
    orientations: Vec<Orientation>,
}

impl Piece {
    fn from_shape(shape: &PieceShape) -> Result<Self, PieceListError> {
        if shape.cells.is_empty() {
            return Err(PieceListError::EmptyPiece {
                name: shape.name.clone(),
            });
        }
        let distinct: BTreeSet<_> = shape.cells.iter().collect();
        if distinct.len() != shape.cells.len() {
            let (row, col) = *shape
                .cells
                .iter()
                .find(|cell| shape.cells.iter().filter(|other| other == cell).count() > 1)
                .expect("a duplicate exists");
            return Err(PieceListError::DuplicateCell {
                name: shape.name.clone(),
                row,
                col,
            });
        }

        let mut seen = BTreeSet::new();
        let mut orientations = Vec::new();
        let mut cells = shape.cells.clone();
        for _reflection in 0..2 {
            for _rotation in 0..4 {
                let normalised = normalise(&cells, &shape.name)?;
                if seen.insert(normalised.clone()) {
                    orientations.push(Orientation::from_normalised(&normalised));
                }
                cells = rotate(&cells);
            }
            cells = reflect(&cells);
        }

        Ok(Self {
            name: shape.name.clone(),
            num_tiles: shape.cells.len(),
            orientations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }
}

fn rotate(cells: &[(i16, i16)]) -> Vec<(i16, i16)> {
    cells.iter().map(|&(row, col)| (col, -row)).collect()
}

fn reflect(cells: &[(i16, i16)]) -> Vec<(i16, i16)> {
    cells.iter().map(|&(row, col)| (row, -col)).collect()
}

fn normalise(cells: &[(i16, i16)], name: &str) -> Result<Vec<(i16, i16)>, PieceListError> {
    let min_row = cells.iter().map(|cell| cell.0).min().expect("pieces are never empty");
    let min_col = cells.iter().map(|cell| cell.1).min().expect("pieces are never empty");
    let mut normalised: Vec<_> = cells
        .iter()
        .map(|&(row, col)| (row - min_row, col - min_col))
        .collect();
    if normalised
        .iter()
        .any(|&(row, col)| row >= i16::from(u8::MAX) || col >= i16::from(u8::MAX))
    {
        return Err(PieceListError::TooLarge {
            name: name.to_string(),
        });
    }
    normalised.sort_unstable();
    Ok(normalised)
}

/// An indexed inventory of pieces. Board states refer to pieces by their
/// index in this list.
#[derive(Debug, Clone)]
pub struct PieceList {
    pieces: Vec<Piece>,
}

impl PieceList {
    pub fn from_shapes(shapes: &[PieceShape]) -> Result<Self, PieceListError> {
        if shapes.is_empty() {
            return Err(PieceListError::Empty);
        }
        let pieces = shapes
            .iter()
            .map(Piece::from_shape)
            .collect::<Result<_, _>>()?;
        Ok(Self { pieces })
    }

    pub fn from_ron_str(text: &str) -> Result<Self, PieceListError> {
        let file: PieceFile = ron::de::from_str(text)?;
        Self::from_shapes(&file.pieces)
    }

    pub fn from_path(path: &Path) -> Result<Self, PieceListError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// The standard 21-piece Blokus inventory.
    pub fn standard() -> Self {
        Self::from_ron_str(STANDARD_PIECES_RON).expect("the embedded standard piece set is well formed")
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    /// The fewest tiles any piece in the inventory has.
    pub fn smallest_piece_size(&self) -> usize {
        self.pieces
            .iter()
            .map(Piece::num_tiles)
            .min()
            .expect("piece lists are never empty")
    }
}

impl std::ops::Index<usize> for PieceList {
    type Output = Piece;

    fn index(&self, index: usize) -> &Piece {
        &self.pieces[index]
    }
}
