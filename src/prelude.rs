//! Commonly used types and operations for ease of import.

pub use crate::{
    create_grid, fire, has_won, place_ship, take_turn, CellState, Game, GameConfig, Grid,
    Outcome, PlayerId, TurnPolicy,
};

#[cfg(feature = "std")]
pub use crate::input::{parse_coordinate, KeyboardInput, PlayerInput, ScriptedInput};
