//! Fixed grid dimensions and per-game settings.

/// Side length of a player's grid.
pub const GRID_SIZE: u8 = 7;
/// Number of one-cell ships in a complete fleet.
pub const FLEET_SIZE: usize = 9;
/// Smallest valid row or column index.
pub const MIN_INDEX: i32 = 0;
/// Largest valid row or column index.
pub const MAX_INDEX: i32 = GRID_SIZE as i32 - 1;

/// Whether an out-of-range shot consumes the shooter's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPolicy {
    /// Only shots that pass coordinate validation hand over the turn.
    #[default]
    AdvanceOnValidShot,
    /// Every shot hands over the turn, including rejected ones.
    AlwaysAdvance,
}

/// Runtime settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub turn_policy: TurnPolicy,
}

impl GameConfig {
    pub const fn new(turn_policy: TurnPolicy) -> Self {
        Self { turn_policy }
    }
}
