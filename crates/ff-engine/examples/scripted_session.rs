//! Scripted Session — drives a seeded game through forced outcomes.
//!
//! Demonstrates the two-phase round protocol: the grid is observable after
//! `spin` and only settles on `calc_spin`. Forced grids stage the top prize
//! and the losing row on demand.

use ff_engine::{Game, GameSettings, REEL_COUNT, SLOTS_PER_REEL, Symbol};

fn show(label: &str, game: &Game) {
    println!(
        "{label}: credits={}, last_winnings={}",
        game.credits(),
        game.last_winnings()
    );
}

fn print_grid(game: &Game) {
    for row in game.grid() {
        let names: Vec<&str> = row.iter().map(|symbol| symbol.name()).collect();
        println!("  {}", names.join(" | "));
    }
}

fn main() {
    let mut game = Game::new(GameSettings::default());
    game.seed(2024);
    show("fresh", &game);

    // A plain random round
    game.spin().expect("the starting balance covers a spin");
    println!("drawn grid:");
    print_grid(&game);
    match game.calc_spin() {
        Ok(winnings) => println!("settled for {winnings}"),
        Err(err) => {
            println!("round ended the game: {err}");
            game.reset();
        }
    }
    show("after round", &game);

    // Stage the top prize
    game.spin().expect("the balance covers a spin");
    game.force_grid([[Symbol::Bell; SLOTS_PER_REEL]; REEL_COUNT]);
    let winnings = game.calc_spin().expect("bell rows always settle");
    println!("forced full house pays {winnings}");
    show("after full house", &game);

    // Stage the losing row
    game.spin().expect("the balance covers a spin");
    let mut grid = [[Symbol::Cherry, Symbol::Lemon, Symbol::Orange]; REEL_COUNT];
    grid[1] = [Symbol::Skull; SLOTS_PER_REEL];
    game.force_grid(grid);
    let err = game.calc_spin().expect_err("a skull row never settles");
    println!("forced skull row: {err}");

    game.reset();
    show("after reset", &game);
}
