//! Game state machine — credit balance and round resolution

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GameSettings;
use crate::error::{GameError, GameResult};
use crate::reel::{Grid, ReelBank};

/// One seat at a fruit machine.
///
/// Drives the two-phase round protocol: `spin` pays the stake and redraws
/// the grid, `calc_spin` scores it and settles the balance. A presentation
/// layer reads the grid between the two calls to show the drawn-but-unscored
/// state; the two calls must stay separate for that reason.
pub struct Game {
    /// Immutable table stakes
    settings: GameSettings,
    /// Live balance; negative after a bust until `reset`
    credits: i64,
    /// Payout of the most recent resolved round
    last_winnings: i64,
    /// The 3×3 grid
    bank: ReelBank,
    /// Random number generator
    rng: StdRng,
    /// Accumulated session statistics
    stats: SessionStats,
}

/// Session statistics, accumulated across rounds and resets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub total_wagered: i64,
    pub total_payout: i64,
    pub wins: u64,
    pub losses: u64,
    pub skull_outs: u64,
    pub busts: u64,
}

impl SessionStats {
    /// Rounds that paid out, as a percentage of all spins
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Net credits over the session (payouts minus wagers)
    pub fn net(&self) -> i64 {
        self.total_payout - self.total_wagered
    }
}

impl Game {
    /// Open a game with the given table stakes
    pub fn new(settings: GameSettings) -> Self {
        Self {
            credits: settings.starting_credits,
            last_winnings: 0,
            bank: ReelBank::new(),
            rng: StdRng::from_os_rng(),
            stats: SessionStats::default(),
            settings,
        }
    }

    /// Seed the RNG for reproducible sessions
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // OBSERVATIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Credits one spin consumes
    pub fn spin_cost(&self) -> i64 {
        self.settings.spin_cost
    }

    /// Credits the game opened with (and returns to on reset)
    pub fn starting_credits(&self) -> i64 {
        self.settings.starting_credits
    }

    /// Live balance
    pub fn credits(&self) -> i64 {
        self.credits
    }

    /// Payout of the most recent resolved round.
    ///
    /// Untouched by `spin`: between `spin` and `calc_spin` it still reports
    /// the previous round.
    pub fn last_winnings(&self) -> i64 {
        self.last_winnings
    }

    /// Row-major snapshot of the grid
    pub fn grid(&self) -> Grid {
        self.bank.grid()
    }

    /// Session statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session statistics
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    /// Overwrite the grid, staging a scripted outcome.
    ///
    /// Meant for demo rigs and tests that need a known grid between `spin`
    /// and `calc_spin`; normal play never calls it.
    pub fn force_grid(&mut self, grid: Grid) {
        self.bank.set_grid(grid);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ROUND PROTOCOL
    // ═══════════════════════════════════════════════════════════════════════════

    /// Pay the stake and redraw the grid.
    ///
    /// Fails with `NotEnoughCredits` when the balance cannot cover the
    /// stake; nothing changes in that case. Scoring happens separately in
    /// `calc_spin`.
    pub fn spin(&mut self) -> GameResult<()> {
        if self.credits < self.settings.spin_cost {
            return Err(GameError::NotEnoughCredits {
                have: self.credits,
                need: self.settings.spin_cost,
            });
        }

        self.credits -= self.settings.spin_cost;
        self.stats.total_spins += 1;
        self.stats.total_wagered += self.settings.spin_cost;
        self.bank.spin(&mut self.rng);
        Ok(())
    }

    /// Score the drawn grid and settle the balance.
    ///
    /// A losing row propagates untouched: balance and `last_winnings` keep
    /// their pre-call values. Otherwise the summed payout lands in
    /// `last_winnings` and the balance; a balance below zero fails with
    /// `NoCredits` and stays negative until `reset`.
    pub fn calc_spin(&mut self) -> GameResult<i64> {
        let winnings = match self.bank.evaluate() {
            Ok(total) => total,
            Err(row) => {
                self.stats.skull_outs += 1;
                self.stats.losses += 1;
                log::debug!("round lost to a skull row");
                return Err(GameError::LosingReel(row));
            }
        };

        self.last_winnings = winnings;
        self.credits += winnings;
        self.stats.total_payout += winnings;
        if winnings > 0 {
            self.stats.wins += 1;
        } else {
            self.stats.losses += 1;
        }

        if self.credits < 0 {
            self.stats.busts += 1;
            log::debug!("balance went negative: {}", self.credits);
            return Err(GameError::NoCredits {
                balance: self.credits,
            });
        }

        Ok(winnings)
    }

    /// Back to the ready state the game opened in.
    ///
    /// Restores the starting balance, clears `last_winnings` and puts the
    /// grid back to bells. Never fails. Session statistics survive; clear
    /// them separately with `reset_stats`.
    pub fn reset(&mut self) {
        self.credits = self.settings.starting_credits;
        self.last_winnings = 0;
        self.bank.to_default();
        log::info!("game reset to {} credits", self.credits);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
