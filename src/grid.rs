//! Grid state for one player's board.
//!
//! A grid is two `BitBoard` layers: every cell that has ever held a ship,
//! and the subset of those that have been sunk. Cell state is derived from
//! the pair, so `Sunk` can only be reached from `Ship` and never left.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::OutOfRangeError;
use crate::config::GRID_SIZE;
use crate::coordinate::{Coordinate, GridSquare};

type BB = BitBoard<u64, { GRID_SIZE as usize }>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Sunk,
}

/// A 7×7 board. Cheap to copy; operations return the updated value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    ships: BB,
    sunk: BB,
}

/// A grid with every cell `Empty`.
pub fn create_grid() -> Grid {
    Grid::new()
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            ships: BB::new(),
            sunk: BB::new(),
        }
    }

    /// State of the cell at (`row`, `col`).
    pub fn cell(&self, row: i32, col: i32) -> Result<CellState, OutOfRangeError> {
        let sq = Coordinate::new(row, col).square()?;
        Ok(self.state_at(sq))
    }

    pub(crate) fn state_at(&self, sq: GridSquare) -> CellState {
        if self.sunk.contains(sq) {
            CellState::Sunk
        } else if self.ships.contains(sq) {
            CellState::Ship
        } else {
            CellState::Empty
        }
    }

    /// Cells that hold a ship, afloat or sunk.
    pub fn ship_count(&self) -> usize {
        self.ships.count_ones()
    }

    /// Cells in state `Ship`.
    pub fn afloat_count(&self) -> usize {
        (self.ships & !self.sunk).count_ones()
    }

    /// Cells in state `Sunk`.
    pub fn sunk_count(&self) -> usize {
        self.sunk.count_ones()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, CellState)> + '_ {
        GridSquare::all().map(move |sq| (sq.row() as i32, sq.col() as i32, self.state_at(sq)))
    }

    /// Empty → Ship. The caller has already checked occupancy and capacity.
    pub(crate) fn put_ship(&mut self, sq: GridSquare) {
        debug_assert_eq!(self.state_at(sq), CellState::Empty);
        self.ships.insert(sq);
    }

    /// Ship → Sunk. No-op unless the cell is currently `Ship`.
    pub(crate) fn sink(&mut self, sq: GridSquare) -> bool {
        if self.state_at(sq) != CellState::Ship {
            return false;
        }
        self.sunk.insert(sq);
        true
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ ships: {}, sunk: {} }}",
            self.ship_count(),
            self.sunk_count()
        )?;
        for sq in GridSquare::all() {
            let ch = match self.state_at(sq) {
                CellState::Empty => '.',
                CellState::Ship => 'S',
                CellState::Sunk => 'X',
            };
            write!(f, "{} ", ch)?;
            if sq.col() + 1 == GRID_SIZE as usize {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
