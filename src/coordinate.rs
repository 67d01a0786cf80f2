//! Grid coordinates and range validation.

use core::fmt;
use rand::Rng;

use crate::bitboard::Square;
use crate::common::{Axis, OutOfRangeError};
use crate::config::{GRID_SIZE, MAX_INDEX, MIN_INDEX};

/// In-range square of a player's grid.
pub(crate) type GridSquare = Square<{ GRID_SIZE as usize }>;

/// A `(row, col)` pair as supplied by callers.
///
/// Any pair of integers is representable; only pairs inside the grid pass
/// [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn validate(&self) -> Result<(), OutOfRangeError> {
        validate(self.row, self.col)
    }

    /// The grid square this coordinate names, if it passes validation.
    pub(crate) fn square(&self) -> Result<GridSquare, OutOfRangeError> {
        self.validate()?;
        // validated rows and columns are non-negative and below GRID_SIZE
        GridSquare::new(self.row as usize, self.col as usize)
            .ok_or(OutOfRangeError::new(Axis::Row, self.row))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Check that both `row` and `col` lie in `[MIN_INDEX, MAX_INDEX]`.
///
/// The row is checked first, so a pair that is wrong on both axes reports
/// the row.
pub fn validate(row: i32, col: i32) -> Result<(), OutOfRangeError> {
    if !(MIN_INDEX..=MAX_INDEX).contains(&row) {
        return Err(OutOfRangeError::new(Axis::Row, row));
    }
    if !(MIN_INDEX..=MAX_INDEX).contains(&col) {
        return Err(OutOfRangeError::new(Axis::Col, col));
    }
    Ok(())
}

/// Uniformly random coordinate inside the grid.
pub fn random_coordinate<R: Rng>(rng: &mut R) -> Coordinate {
    let size = GRID_SIZE as i32;
    Coordinate::new(rng.random_range(0..size), rng.random_range(0..size))
}
