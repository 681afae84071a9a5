//! Symbol set and weighted draws

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One reel icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    /// Rarest draw; three of these pay the top prize
    Bell = 0,
    Cherry = 1,
    Lemon = 2,
    Orange = 3,
    Star = 4,
    /// Most likely draw; a pair costs credits, a triple ends the game
    Skull = 5,
}

impl Symbol {
    /// Every drawable symbol, in weight-table order
    pub const ALL: [Symbol; 6] = [
        Symbol::Bell,
        Symbol::Cherry,
        Symbol::Lemon,
        Symbol::Orange,
        Symbol::Star,
        Symbol::Skull,
    ];

    /// Sum of all draw weights
    pub const TOTAL_WEIGHT: u32 = 18;

    /// Relative draw weight. Static for the life of the process.
    pub fn weight(self) -> u32 {
        match self {
            Symbol::Bell => 1,
            Symbol::Cherry => 3,
            Symbol::Lemon => 3,
            Symbol::Orange => 3,
            Symbol::Star => 3,
            Symbol::Skull => 5,
        }
    }

    /// Display name for presentation layers
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Bell => "BELL",
            Symbol::Cherry => "CHERRY",
            Symbol::Lemon => "LEMON",
            Symbol::Orange => "ORANGE",
            Symbol::Star => "STAR",
            Symbol::Skull => "SKULL",
        }
    }

    /// Draw one symbol from the weight table.
    ///
    /// Walks the cumulative weight bands with a single roll in
    /// `0..TOTAL_WEIGHT`, so each symbol lands with probability
    /// `weight / TOTAL_WEIGHT`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut roll = rng.random_range(0..Self::TOTAL_WEIGHT);
        for symbol in Self::ALL {
            if roll < symbol.weight() {
                return symbol;
            }
            roll -= symbol.weight();
        }
        // The bands cover 0..TOTAL_WEIGHT exactly, so the last one absorbs
        // whatever is left
        Symbol::Skull
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_weight_table() {
        assert_eq!(Symbol::Bell.weight(), 1);
        assert_eq!(Symbol::Cherry.weight(), 3);
        assert_eq!(Symbol::Skull.weight(), 5);

        let sum: u32 = Symbol::ALL.iter().map(|s| s.weight()).sum();
        assert_eq!(sum, Symbol::TOTAL_WEIGHT);
    }

    #[test]
    fn test_draw_skew() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut skulls = 0u32;
        let mut bells = 0u32;

        for _ in 0..10_000 {
            match Symbol::draw(&mut rng) {
                Symbol::Skull => skulls += 1,
                Symbol::Bell => bells += 1,
                _ => {}
            }
        }

        // 5:1 weight ratio leaves no room for doubt over 10k draws
        assert!(skulls > bells);
    }

    #[test]
    fn test_names() {
        assert_eq!(Symbol::Bell.name(), "BELL");
        assert_eq!(Symbol::Skull.to_string(), "SKULL");
    }
}
