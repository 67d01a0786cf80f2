//! Turn orchestration and a two-player session built on it.

use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::{
    common::{OutOfRangeError, Outcome, PlacementError},
    config::{GameConfig, FLEET_SIZE},
    grid::Grid,
    placement, shot,
    turn::{self, PlayerId},
    win::has_won,
};

/// What a single turn produced, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Player who acts next.
    pub next_player: PlayerId,
    pub outcome: Outcome,
    /// `true` when the shot sank the last ship of the target grid.
    pub won: bool,
}

/// Composes validation, shot resolution, win detection and turn handoff.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnOrchestrator {
    config: GameConfig,
}

impl TurnOrchestrator {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// `player` fires at (`row`, `col`) on the opponent's `grid`.
    ///
    /// Invalid coordinates leave the grid untouched and report `Invalid`
    /// with `won == false`; whether the turn still passes depends on the
    /// configured policy.
    pub fn take_turn(
        &self,
        player: PlayerId,
        grid: Grid,
        row: i32,
        col: i32,
    ) -> (Grid, TurnReport, Result<(), OutOfRangeError>) {
        let (next, res) = shot::fire(grid, row, col);
        match res {
            Err(e) => {
                let report = TurnReport {
                    next_player: turn::advance_with(self.config.turn_policy, player, false),
                    outcome: Outcome::Invalid,
                    won: false,
                };
                (grid, report, Err(e))
            }
            Ok(s) => {
                let won = has_won(&next);
                let report = TurnReport {
                    next_player: turn::advance_with(self.config.turn_policy, player, true),
                    outcome: s.into(),
                    won,
                };
                debug!("{} -> {}, next {}", player, report.outcome, report.next_player);
                (next, report, Ok(()))
            }
        }
    }
}

/// Take a turn with the default policy: invalid shots do not pass the turn.
pub fn take_turn(
    player: PlayerId,
    grid: Grid,
    row: i32,
    col: i32,
) -> (Grid, TurnReport, Result<(), OutOfRangeError>) {
    TurnOrchestrator::default().take_turn(player, grid, row, col)
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fleets are being placed.
    Setup,
    /// Both fleets complete; players alternate shots.
    Playing,
    Finished { winner: PlayerId },
}

/// Errors from the session helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ships can only be placed during setup.
    NotInSetup,
    /// Shots need both fleets placed; carries the player still placing.
    FleetIncomplete(PlayerId),
    /// The game already has a winner.
    GameOver(PlayerId),
    Placement(PlacementError),
    OutOfRange(OutOfRangeError),
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<OutOfRangeError> for GameError {
    fn from(err: OutOfRangeError) -> Self {
        GameError::OutOfRange(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotInSetup => write!(f, "ships can only be placed before the first shot"),
            GameError::FleetIncomplete(p) => {
                write!(f, "{} has not placed all {} ships", p, FLEET_SIZE)
            }
            GameError::GameOver(p) => write!(f, "game is over, {} won", p),
            GameError::Placement(e) => write!(f, "{}", e),
            GameError::OutOfRange(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Caller-side holder of both grids and the active player.
///
/// Every mutation goes through the value-returning core operations; the
/// session only keeps whichever grid they hand back.
#[derive(Debug, Clone)]
pub struct Game {
    grids: [Grid; 2],
    active: PlayerId,
    phase: GamePhase,
    orchestrator: TurnOrchestrator,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            grids: [Grid::new(); 2],
            active: PlayerId::One,
            phase: GamePhase::Setup,
            orchestrator: TurnOrchestrator::new(config),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The board that belongs to `player`.
    pub fn grid(&self, player: PlayerId) -> &Grid {
        &self.grids[slot(player)]
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Place one of `player`'s ships during setup.
    pub fn place_ship(&mut self, player: PlayerId, row: i32, col: i32) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotInSetup);
        }
        let (grid, res) = placement::place_ship(self.grids[slot(player)], row, col);
        self.grids[slot(player)] = grid;
        res?;
        self.start_if_ready();
        Ok(())
    }

    /// Complete `player`'s fleet at random empty cells.
    pub fn random_fleet<R: Rng>(&mut self, player: PlayerId, rng: &mut R) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotInSetup);
        }
        let (grid, res) = placement::random_fleet(self.grids[slot(player)], rng);
        self.grids[slot(player)] = grid;
        res?;
        self.start_if_ready();
        Ok(())
    }

    /// Fleet cells still to place for `player`.
    pub fn ships_to_place(&self, player: PlayerId) -> usize {
        FLEET_SIZE - self.grid(player).ship_count()
    }

    /// The active player fires at (`row`, `col`) on the opponent's grid.
    ///
    /// An out-of-range shot returns `GameError::OutOfRange`; under
    /// `TurnPolicy::AlwaysAdvance` the turn has still passed.
    pub fn fire(&mut self, row: i32, col: i32) -> Result<TurnReport, GameError> {
        match self.phase {
            GamePhase::Setup => {
                let pending = if self.ships_to_place(PlayerId::One) > 0 {
                    PlayerId::One
                } else {
                    PlayerId::Two
                };
                return Err(GameError::FleetIncomplete(pending));
            }
            GamePhase::Finished { winner } => return Err(GameError::GameOver(winner)),
            GamePhase::Playing => {}
        }
        let shooter = self.active;
        let target = slot(shooter.opponent());
        let (grid, report, res) = self
            .orchestrator
            .take_turn(shooter, self.grids[target], row, col);
        self.grids[target] = grid;
        self.active = report.next_player;
        if report.won {
            info!("{} sank the last ship", shooter);
            self.phase = GamePhase::Finished { winner: shooter };
        }
        res?;
        Ok(report)
    }

    fn start_if_ready(&mut self) {
        if self.grids.iter().all(|g| g.ship_count() == FLEET_SIZE) {
            info!("both fleets placed, {} to fire first", self.active);
            self.phase = GamePhase::Playing;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn slot(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}
