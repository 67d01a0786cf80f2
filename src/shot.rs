//! Shot resolution against a single grid.

use log::debug;

use crate::common::{OutOfRangeError, Shot};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Fire at (`row`, `col`).
///
/// A cell in state `Ship` becomes `Sunk` and the shot is a `Hit`. Empty
/// water and already-sunk cells are a `Miss` and leave the grid as it was,
/// so re-firing at a wreck never counts twice. Invalid coordinates return
/// the input grid with the range error.
pub fn fire(grid: Grid, row: i32, col: i32) -> (Grid, Result<Shot, OutOfRangeError>) {
    let sq = match Coordinate::new(row, col).square() {
        Ok(sq) => sq,
        Err(e) => {
            debug!("shot at ({}, {}) rejected: {}", row, col, e);
            return (grid, Err(e));
        }
    };
    let mut next = grid;
    let shot = if next.sink(sq) { Shot::Hit } else { Shot::Miss };
    debug!("shot at ({}, {}): {:?}, {} afloat", row, col, shot, next.afloat_count());
    (next, Ok(shot))
}
