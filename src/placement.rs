//! Ship placement under occupancy and fleet-size limits.

use log::{debug, trace};
use rand::Rng;

use crate::common::PlacementError;
use crate::config::FLEET_SIZE;
use crate::coordinate::Coordinate;
use crate::grid::{CellState, Grid};

/// Place a one-cell ship at (`row`, `col`).
///
/// Checks run in a fixed order: range, then occupancy, then capacity. On any
/// error the returned grid is the input grid.
pub fn place_ship(grid: Grid, row: i32, col: i32) -> (Grid, Result<(), PlacementError>) {
    match try_place(grid, Coordinate::new(row, col)) {
        Ok(next) => {
            debug!("ship placed at ({}, {}), fleet {}/{}", row, col, next.ship_count(), FLEET_SIZE);
            (next, Ok(()))
        }
        Err(e) => {
            debug!("placement at ({}, {}) rejected: {}", row, col, e);
            (grid, Err(e))
        }
    }
}

fn try_place(mut grid: Grid, coord: Coordinate) -> Result<Grid, PlacementError> {
    let sq = coord.square()?;
    if grid.state_at(sq) != CellState::Empty {
        return Err(PlacementError::AlreadyOccupied {
            row: coord.row,
            col: coord.col,
        });
    }
    if grid.ship_count() >= FLEET_SIZE {
        return Err(PlacementError::CapacityExceeded);
    }
    grid.put_ship(sq);
    Ok(grid)
}

/// Fill the remainder of the fleet at random empty cells.
///
/// Returns `CapacityExceeded` with the grid untouched when the fleet is
/// already complete.
pub fn random_fleet<R: Rng>(grid: Grid, rng: &mut R) -> (Grid, Result<(), PlacementError>) {
    if grid.ship_count() >= FLEET_SIZE {
        return (grid, Err(PlacementError::CapacityExceeded));
    }
    let start = grid;
    let mut grid = grid;
    while grid.ship_count() < FLEET_SIZE {
        let empty = grid
            .cells()
            .filter(|&(_, _, state)| state == CellState::Empty)
            .count();
        // pick the k-th empty cell so every draw lands on a free square
        let k = rng.random_range(0..empty);
        let (row, col, _) = match grid
            .cells()
            .filter(|&(_, _, state)| state == CellState::Empty)
            .nth(k)
        {
            Some(cell) => cell,
            None => break,
        };
        let (next, res) = place_ship(grid, row, col);
        if let Err(e) = res {
            return (start, Err(e));
        }
        trace!("random ship at ({}, {})", row, col);
        grid = next;
    }
    (grid, Ok(()))
}
