use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A board cell, row-major with `(0, 0)` in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        let rows = (i32::from(self.row) - i32::from(other.row)).unsigned_abs();
        let cols = (i32::from(self.col) - i32::from(other.col)).unsigned_abs();
        rows + cols
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a position of the form `row,col`, got `{0}`")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError(s.to_string()))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| ParsePositionError(s.to_string()))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| ParsePositionError(s.to_string()))?;
        Ok(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_col_pairs() {
        assert_eq!("3,4".parse(), Ok(Position::new(3, 4)));
        assert_eq!("0, 0".parse(), Ok(Position::new(0, 0)));
        assert!("3;4".parse::<Position>().is_err());
        assert!("3,x".parse::<Position>().is_err());
        assert!("300,0".parse::<Position>().is_err());
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(0, 3);
        let b = Position::new(2, 0);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
    }
}
