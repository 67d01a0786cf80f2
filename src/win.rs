//! Victory check for a single grid.

use crate::config::FLEET_SIZE;
use crate::grid::Grid;

/// `true` once exactly a full fleet of cells has been sunk.
pub fn has_won(grid: &Grid) -> bool {
    grid.sunk_count() == FLEET_SIZE
}
