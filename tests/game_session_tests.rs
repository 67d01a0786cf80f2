use battleship_grid::{
    CellState, Game, GameConfig, GameError, GamePhase, Outcome, PlacementError, PlayerId,
    TurnPolicy, FLEET_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

const FLEET: [(i32, i32); FLEET_SIZE] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (1, 0),
    (1, 1),
];

fn ready_game(config: GameConfig) -> Game {
    let mut game = Game::new(config);
    for player in [PlayerId::One, PlayerId::Two] {
        for &(r, c) in &FLEET {
            game.place_ship(player, r, c).unwrap();
        }
    }
    game
}

#[test]
fn test_setup_until_both_fleets_placed() {
    let mut game = Game::default();
    assert_eq!(game.phase(), GamePhase::Setup);
    for &(r, c) in &FLEET {
        game.place_ship(PlayerId::One, r, c).unwrap();
    }
    assert_eq!(game.phase(), GamePhase::Setup);
    assert_eq!(game.ships_to_place(PlayerId::Two), FLEET_SIZE);
    assert_eq!(game.fire(0, 0), Err(GameError::FleetIncomplete(PlayerId::Two)));

    let mut rng = SmallRng::seed_from_u64(3);
    game.random_fleet(PlayerId::Two, &mut rng).unwrap();
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_placement_errors_surface() {
    let mut game = Game::default();
    game.place_ship(PlayerId::One, 2, 2).unwrap();
    assert_eq!(
        game.place_ship(PlayerId::One, 2, 2),
        Err(GameError::Placement(PlacementError::AlreadyOccupied { row: 2, col: 2 }))
    );
    // grids are per player
    game.place_ship(PlayerId::Two, 2, 2).unwrap();
    assert_eq!(game.grid(PlayerId::Two).ship_count(), 1);
}

#[test]
fn test_no_placement_after_setup() {
    let mut game = ready_game(GameConfig::default());
    assert_eq!(game.place_ship(PlayerId::One, 5, 5), Err(GameError::NotInSetup));
}

#[test]
fn test_shots_land_on_opponent_grid() {
    let mut game = ready_game(GameConfig::default());
    let report = game.fire(0, 0).unwrap();
    assert_eq!(report.outcome, Outcome::Hit);
    assert_eq!(game.grid(PlayerId::Two).cell(0, 0), Ok(CellState::Sunk));
    assert_eq!(game.grid(PlayerId::One).cell(0, 0), Ok(CellState::Ship));
    assert_eq!(game.active_player(), PlayerId::Two);
}

#[test]
fn test_invalid_shot_keeps_turn_by_default() {
    let mut game = ready_game(GameConfig::default());
    assert!(matches!(game.fire(-1, 4), Err(GameError::OutOfRange(_))));
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_invalid_shot_passes_turn_when_configured() {
    let mut game = ready_game(GameConfig::new(TurnPolicy::AlwaysAdvance));
    assert!(matches!(game.fire(-1, 4), Err(GameError::OutOfRange(_))));
    assert_eq!(game.active_player(), PlayerId::Two);
}

#[test]
fn test_full_game_to_victory() {
    let mut game = ready_game(GameConfig::default());
    for &(r, c) in &FLEET {
        // player one hits, player two fires into open water
        let report = game.fire(r, c).unwrap();
        assert_eq!(report.outcome, Outcome::Hit);
        if report.won {
            break;
        }
        let report = game.fire(6, 6).unwrap();
        assert_eq!(report.outcome, Outcome::Miss);
    }
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert_eq!(
        game.phase(),
        GamePhase::Finished {
            winner: PlayerId::One
        }
    );
    assert_eq!(game.fire(6, 6), Err(GameError::GameOver(PlayerId::One)));
}
