pub mod heuristics;
pub mod problems;

mod board;
mod moves;
mod piece;
mod position;

pub use board::Board;
pub use moves::Move;
pub use piece::{Orientation, Piece, PieceList, PieceListError, PieceShape};
pub use position::{ParsePositionError, Position};
