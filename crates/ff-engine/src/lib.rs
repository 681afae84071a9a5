//! # ff-engine — Fruit machine simulation core
//!
//! Simulates a three-reel, three-row fruit machine: weighted symbol draws
//! feeding a fixed per-row paytable, and a credit state machine that carries
//! the player from spin to spin until a bust or a triple-skull row ends the
//! game.
//!
//! ## Features
//!
//! - **Weighted Reels**: Six-symbol set with a fixed weight table (skull
//!   most likely, bell rarest)
//! - **Fixed Paytable**: Per-row scoring over the slot multiset, including
//!   the skull-pair penalty and the triple-bell top prize
//! - **Two-phase Rounds**: `spin` pays and redraws, `calc_spin` scores and
//!   settles, so front-ends can render the drawn grid before it resolves
//! - **Deterministic Replay**: Seedable RNG and a grid-forcing hook for
//!   scripted outcomes
//! - **Session Statistics**: Spin counts, wagers, payouts, hit rate
//!
//! ## Architecture
//!
//! ```text
//! Game
//!     │
//!     ├── GameSettings (starting credits, spin cost)
//!     ├── ReelBank (3 × Reel, each 3 slots)
//!     │         └── paytable::evaluate_row (per-row scoring)
//!     └── SessionStats (accumulated across rounds)
//!           │
//!           v
//!     spin() → calc_spin() → payout | GameError
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod paytable;
pub mod reel;
pub mod symbols;

pub use config::*;
pub use error::*;
pub use game::*;
pub use paytable::*;
pub use reel::*;
pub use symbols::*;
