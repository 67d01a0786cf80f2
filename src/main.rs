use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use battleship_grid::{
    init_logging,
    input::{parse_coordinate, KeyboardInput, PlayerInput, ScriptedInput},
    Game, GameConfig, GameError, GamePhase, PlayerId, TurnPolicy, FLEET_SIZE, MAX_INDEX,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Hot-seat battleships on a 7x7 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Place both fleets at random instead of prompting")]
    random_fleet: bool,
    #[arg(long, help = "Hand over the turn even when a shot is off the grid")]
    always_advance: bool,
    #[arg(long, help = "Read moves from a file, one coordinate per line")]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let policy = if cli.always_advance {
        TurnPolicy::AlwaysAdvance
    } else {
        TurnPolicy::AdvanceOnValidShot
    };
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut input: Box<dyn PlayerInput> = match &cli.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?;
            Box::new(ScriptedInput::new(text.lines()))
        }
        None => Box::new(KeyboardInput::new(io::stdin().lock())),
    };

    let mut game = Game::new(GameConfig::new(policy));
    for player in [PlayerId::One, PlayerId::Two] {
        if cli.random_fleet {
            game.random_fleet(player, &mut rng)?;
            println!("{}: fleet placed at random", player);
        } else if !place_fleet(&mut game, player, input.as_mut())? {
            println!("Input ended during setup");
            return Ok(());
        }
    }

    while game.phase() == GamePhase::Playing {
        let player = game.active_player();
        prompt(&format!("{}, fire at (row col): ", player))?;
        let Some(line) = input.fetch() else {
            println!("Input ended before a winner");
            return Ok(());
        };
        let Some((row, col)) = parse_coordinate(&line) else {
            println!("Could not read '{}' as a coordinate", line.trim());
            continue;
        };
        match game.fire(row, col) {
            Ok(report) => println!("{}", report.outcome),
            Err(GameError::OutOfRange(e)) => println!("Invalid: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(winner) = game.winner() {
        println!("{} wins!", winner);
    }
    Ok(())
}

/// Prompt `player` until their fleet is complete. `false` when input runs out.
fn place_fleet(
    game: &mut Game,
    player: PlayerId,
    input: &mut dyn PlayerInput,
) -> anyhow::Result<bool> {
    println!(
        "{}: place {} ships, rows and columns 0-{}",
        player, FLEET_SIZE, MAX_INDEX
    );
    while game.ships_to_place(player) > 0 {
        prompt(&format!(
            "{} ship {}/{}: ",
            player,
            FLEET_SIZE - game.ships_to_place(player) + 1,
            FLEET_SIZE
        ))?;
        let Some(line) = input.fetch() else {
            return Ok(false);
        };
        let Some((row, col)) = parse_coordinate(&line) else {
            println!("Could not read '{}' as a coordinate", line.trim());
            continue;
        };
        match game.place_ship(player, row, col) {
            Ok(()) => {}
            Err(GameError::Placement(e)) => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}
