//! Error types for the fruit machine engine

use thiserror::Error;

/// A row of three skulls.
///
/// Raised by row evaluation instead of a numeric payout; it is the outcome
/// that ends the game rather than adjusting the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("three skulls in a row")]
pub struct LosingRow;

/// Round-terminal signals raised by the game state machine.
///
/// None of these is recoverable in place: the caller blocks the action
/// (`NotEnoughCredits`) or treats the round as game over and calls
/// `reset` (`LosingReel`, `NoCredits`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The balance cannot cover another spin
    #[error("not enough credits: have {have}, spin costs {need}")]
    NotEnoughCredits { have: i64, need: i64 },
    /// A reel row came up all skulls
    #[error("losing reel: {0}")]
    LosingReel(#[from] LosingRow),
    /// The last payout pushed the balance below zero
    #[error("out of credits: balance is {balance}")]
    NoCredits { balance: i64 },
}

pub type GameResult<T> = Result<T, GameError>;
