#![cfg_attr(not(feature = "std"), no_std)]
//! Two-player naval combat on fixed 7×7 grids.
//!
//! The core is value-oriented: every mutating operation takes the current
//! [`Grid`] and returns the grid to use from then on, together with the
//! outcome or error. On any error the returned grid equals the input.

mod bitboard;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod shot;
mod turn;
mod win;

pub use common::*;
pub use config::*;
pub use coordinate::{random_coordinate, validate, Coordinate};
pub use game::{take_turn, Game, GameError, GamePhase, TurnOrchestrator, TurnReport};
pub use grid::{create_grid, CellState, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{place_ship, random_fleet};
pub use shot::fire;
pub use turn::{advance, advance_with, PlayerId};
pub use win::has_won;
