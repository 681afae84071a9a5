//! fruitforge — console fruit machine
//!
//! Drives `ff-engine` through the two-phase round protocol: a paid spin
//! draws the grid, which is shown before it settles. Game overs put a
//! fresh game on the table.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use ff_engine::{Game, GameError, GameSettings, Grid};

#[derive(Parser)]
#[command(
    name = "fruitforge",
    version,
    about = "Three-reel fruit machine for the terminal"
)]
struct Cli {
    /// Credits on the table at the start (overrides the settings file)
    #[arg(long, global = true)]
    credits: Option<i64>,

    /// Cost of one spin (overrides the settings file)
    #[arg(long, global = true)]
    cost: Option<i64>,

    /// Seed the reel RNG for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play rounds without prompts and report session statistics
    Simulate {
        /// Rounds to play
        #[arg(long, default_value_t = 10_000)]
        spins: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = resolve_settings(&cli)?;
    let mut game = Game::new(settings);
    if let Some(seed) = cli.seed {
        game.seed(seed);
    }
    log::info!(
        "starting with {} credits, {} per spin",
        settings.starting_credits,
        settings.spin_cost
    );

    match cli.command {
        Some(Command::Simulate { spins }) => simulate(&mut game, spins),
        None => play(&mut game),
    }
}

/// Settings file first, then explicit flags on top, then the positivity check
fn resolve_settings(cli: &Cli) -> Result<GameSettings> {
    let mut settings = match &cli.settings {
        Some(path) => GameSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => GameSettings::default(),
    };

    if let Some(credits) = cli.credits {
        settings.starting_credits = credits;
    }
    if let Some(cost) = cli.cost {
        settings.spin_cost = cost;
    }
    settings.validate()?;
    Ok(settings)
}

// ═══════════════════════════════════════════════════════════════════════════
// INTERACTIVE SESSION
// ═══════════════════════════════════════════════════════════════════════════

fn play(game: &mut Game) -> Result<()> {
    let title = format!("Fruit Machine {}", env!("CARGO_PKG_VERSION"));

    loop {
        println!();
        println!("{title}");
        print_stats(game);
        println!("Menu:");
        println!("\t1. Spin (costs {})", game.spin_cost());
        println!("\t2. Restart");
        println!("\t3. Quit");

        let Some(choice) = prompt(">> ")? else { break };
        match choice.trim() {
            "1" => {
                println!();
                println!("{title}");
                print_stats(game);
                println!("Spin:");
                play_round(game);
                if pause()?.is_none() {
                    break;
                }
            }
            "2" => game.reset(),
            "3" => break,
            other => {
                println!("unknown choice: '{other}'");
                if pause()?.is_none() {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// One round: pay and draw, then settle the shown grid. Game overs reset.
fn play_round(game: &mut Game) {
    if let Err(err) = game.spin() {
        match err {
            GameError::NotEnoughCredits { .. } => {
                println!("You don't have enough credits to spin!");
            }
            other => println!("{other}"),
        }
        return;
    }

    print_grid(&game.grid());

    match game.calc_spin() {
        Ok(_) => {}
        Err(GameError::LosingReel(_)) => {
            println!("You got 3 skulls!");
            game_over(game);
        }
        Err(GameError::NoCredits { .. }) => {
            println!("You have lost all of your credits!");
            game_over(game);
        }
        Err(other) => println!("{other}"),
    }
}

fn game_over(game: &mut Game) {
    println!(
        "Game over! Starting over with {} credits.",
        game.starting_credits()
    );
    game.reset();
}

fn print_stats(game: &Game) {
    println!("Stats:");
    println!(
        "Last Spin = {}, Credits = {}",
        game.last_winnings(),
        game.credits()
    );
}

fn print_grid(grid: &Grid) {
    println!("---");
    for row in grid {
        let names: Vec<&str> = row.iter().map(|symbol| symbol.name()).collect();
        println!("{}", names.join("\t|"));
    }
    println!("---");
}

/// Prompt and read one line; `None` once stdin is closed
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn pause() -> Result<Option<()>> {
    Ok(prompt("(press <enter> to resume)")?.map(|_| ()))
}

// ═══════════════════════════════════════════════════════════════════════════
// BATCH SIMULATION
// ═══════════════════════════════════════════════════════════════════════════

fn simulate(game: &mut Game, spins: u64) -> Result<()> {
    if game.spin_cost() > game.starting_credits() {
        bail!(
            "spin cost {} exceeds starting credits {}; the machine could never spin",
            game.spin_cost(),
            game.starting_credits()
        );
    }

    let mut played = 0u64;
    while played < spins {
        match game.spin() {
            Ok(()) => {}
            Err(GameError::NotEnoughCredits { .. }) => {
                // Balance ran dry without a bust; fresh game, same session
                game.reset();
                continue;
            }
            Err(other) => return Err(other.into()),
        }
        played += 1;

        if game.calc_spin().is_err() {
            // Skull row or bust; the stats already counted it
            game.reset();
        }
    }

    let stats = game.stats();
    println!("Rounds played:    {}", stats.total_spins);
    println!("Total wagered:    {}", stats.total_wagered);
    println!("Total paid out:   {}", stats.total_payout);
    println!("Net result:       {}", stats.net());
    println!("Hit rate:         {:.1}%", stats.hit_rate());
    println!("Skull game overs: {}", stats.skull_outs);
    println!("Busts:            {}", stats.busts);
    Ok(())
}
