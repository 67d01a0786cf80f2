use battleship_grid::{
    create_grid, fire, has_won, place_ship, random_fleet, take_turn, CellState, Grid,
    OutOfRangeError, Outcome, PlacementError, PlayerId, Shot, FLEET_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_grid(seed: u64, shots: &[(i32, i32)]) -> Grid {
    let (grid, _) = random_fleet(create_grid(), &mut SmallRng::seed_from_u64(seed));
    shots.iter().fold(grid, |g, &(r, c)| fire(g, r, c).0)
}

fn off_grid() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (i32::MIN..0, any::<i32>()),
        (7..i32::MAX, any::<i32>()),
        (0..7i32, i32::MIN..0),
        (0..7i32, 7..i32::MAX),
    ]
}

fn on_grid() -> impl Strategy<Value = (i32, i32)> {
    (0..7i32, 0..7i32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_on_empty_cell_succeeds((row, col) in on_grid(), ships in 0..FLEET_SIZE) {
        // build a grid with `ships` ships that leaves (row, col) empty
        let mut grid = create_grid();
        for (r, c, _) in create_grid().cells() {
            if grid.ship_count() == ships {
                break;
            }
            if (r, c) != (row, col) {
                grid = place_ship(grid, r, c).0;
            }
        }
        let (after, res) = place_ship(grid, row, col);
        prop_assert_eq!(res, Ok(()));
        prop_assert_eq!(after.cell(row, col), Ok(CellState::Ship));
        prop_assert_eq!(after.ship_count(), ships + 1);
    }

    #[test]
    fn off_grid_never_mutates(seed in any::<u64>(), (row, col) in off_grid(), shots in prop::collection::vec(on_grid(), 0..20)) {
        let grid = random_grid(seed, &shots);

        let (after, res) = place_ship(grid, row, col);
        prop_assert!(matches!(res, Err(PlacementError::OutOfRange(_))));
        prop_assert_eq!(after, grid);

        let (after, res) = fire(grid, row, col);
        prop_assert!(res.is_err());
        prop_assert_eq!(after, grid);

        let (after, report, res) = take_turn(PlayerId::Two, grid, row, col);
        let _: OutOfRangeError = res.unwrap_err();
        prop_assert_eq!(after, grid);
        prop_assert_eq!(report.next_player, PlayerId::Two);
        prop_assert_eq!(report.outcome, Outcome::Invalid);
        prop_assert!(!report.won);
    }

    #[test]
    fn occupied_cell_rejected(seed in any::<u64>(), shots in prop::collection::vec(on_grid(), 0..20), pick in 0..FLEET_SIZE) {
        let grid = random_grid(seed, &shots);
        let (r, c, _) = grid
            .cells()
            .filter(|&(_, _, s)| s != CellState::Empty)
            .nth(pick)
            .unwrap();
        let (after, res) = place_ship(grid, r, c);
        prop_assert_eq!(res, Err(PlacementError::AlreadyOccupied { row: r, col: c }));
        prop_assert_eq!(after.ship_count(), grid.ship_count());
        prop_assert_eq!(after, grid);
    }

    #[test]
    fn refire_is_idempotent(seed in any::<u64>(), (row, col) in on_grid()) {
        let grid = random_grid(seed, &[]);
        let was_ship = grid.cell(row, col) == Ok(CellState::Ship);
        let (once, first) = fire(grid, row, col);
        prop_assert_eq!(first, Ok(if was_ship { Shot::Hit } else { Shot::Miss }));
        let (twice, second) = fire(once, row, col);
        prop_assert_eq!(second, Ok(Shot::Miss));
        prop_assert_eq!(twice.sunk_count(), once.sunk_count());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn valid_turn_always_toggles(seed in any::<u64>(), (row, col) in on_grid(), first in any::<bool>()) {
        let player = if first { PlayerId::One } else { PlayerId::Two };
        let grid = random_grid(seed, &[]);
        let (_, report, res) = take_turn(player, grid, row, col);
        prop_assert_eq!(res, Ok(()));
        prop_assert_eq!(report.next_player, player.opponent());
        prop_assert!(report.outcome != Outcome::Invalid);
    }

    #[test]
    fn won_iff_nine_sunk(seed in any::<u64>(), shots in prop::collection::vec(on_grid(), 0..49)) {
        let grid = random_grid(seed, &shots);
        prop_assert!(grid.ship_count() <= FLEET_SIZE);
        prop_assert_eq!(has_won(&grid), grid.sunk_count() == FLEET_SIZE);
        prop_assert_eq!(grid.sunk_count() + grid.afloat_count(), grid.ship_count());
    }
}
