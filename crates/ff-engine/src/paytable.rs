//! Row payout rules
//!
//! The table is fixed. It is scored against the multiset of a row's three
//! slots: the most frequent symbol (the mode) and how often it occurs decide
//! the branch.

use crate::error::LosingRow;
use crate::reel::SLOTS_PER_REEL;
use crate::symbols::Symbol;

/// Three bells, the top prize
pub const TRIPLE_BELL_PAYOUT: i64 = 500;
/// Three of a kind, any other symbol
pub const TRIPLE_PAYOUT: i64 = 100;
/// A pair of any non-skull symbol
pub const PAIR_PAYOUT: i64 = 50;
/// A pair of skulls takes credits away
pub const SKULL_PAIR_PAYOUT: i64 = -100;

/// Most frequent symbol in the row and its count.
///
/// Three slots can only split 1-1-1, 2-1 or 3, so the mode's count is never
/// ambiguous; with 1-1-1 the first slot stands in and the count is what
/// matters.
fn mode(slots: &[Symbol; SLOTS_PER_REEL]) -> (Symbol, usize) {
    let mut best = (slots[0], 0);
    for &candidate in slots {
        let count = slots.iter().filter(|&&s| s == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best
}

/// Score one row against the payout table.
///
/// Returns the signed payout, or `LosingRow` when the row is all skulls.
pub fn evaluate_row(slots: &[Symbol; SLOTS_PER_REEL]) -> Result<i64, LosingRow> {
    let (symbol, count) = mode(slots);

    if count == 1 {
        // All three distinct
        return Ok(0);
    }

    if symbol == Symbol::Skull {
        if count == 3 {
            return Err(LosingRow);
        }
        return Ok(SKULL_PAIR_PAYOUT);
    }

    Ok(match (symbol, count) {
        (Symbol::Bell, 3) => TRIPLE_BELL_PAYOUT,
        (_, 3) => TRIPLE_PAYOUT,
        _ => PAIR_PAYOUT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_bell() {
        let row = [Symbol::Bell, Symbol::Bell, Symbol::Bell];
        assert_eq!(evaluate_row(&row), Ok(TRIPLE_BELL_PAYOUT));
    }

    #[test]
    fn test_triple_skull_loses() {
        let row = [Symbol::Skull, Symbol::Skull, Symbol::Skull];
        assert_eq!(evaluate_row(&row), Err(LosingRow));
    }

    #[test]
    fn test_skull_pair_penalty() {
        let row = [Symbol::Skull, Symbol::Skull, Symbol::Cherry];
        assert_eq!(evaluate_row(&row), Ok(SKULL_PAIR_PAYOUT));

        // Slot order is irrelevant
        let row = [Symbol::Cherry, Symbol::Skull, Symbol::Skull];
        assert_eq!(evaluate_row(&row), Ok(SKULL_PAIR_PAYOUT));
    }

    #[test]
    fn test_other_triples() {
        let row = [Symbol::Cherry, Symbol::Cherry, Symbol::Cherry];
        assert_eq!(evaluate_row(&row), Ok(TRIPLE_PAYOUT));

        let row = [Symbol::Star, Symbol::Star, Symbol::Star];
        assert_eq!(evaluate_row(&row), Ok(TRIPLE_PAYOUT));
    }

    #[test]
    fn test_pair() {
        let row = [Symbol::Cherry, Symbol::Cherry, Symbol::Lemon];
        assert_eq!(evaluate_row(&row), Ok(PAIR_PAYOUT));

        // A single skull does not spoil a fruit pair
        let row = [Symbol::Orange, Symbol::Skull, Symbol::Orange];
        assert_eq!(evaluate_row(&row), Ok(PAIR_PAYOUT));
    }

    #[test]
    fn test_all_distinct_pays_nothing() {
        let row = [Symbol::Cherry, Symbol::Lemon, Symbol::Orange];
        assert_eq!(evaluate_row(&row), Ok(0));

        // Distinct rows containing a skull still pay nothing
        let row = [Symbol::Bell, Symbol::Star, Symbol::Skull];
        assert_eq!(evaluate_row(&row), Ok(0));
    }

    #[test]
    fn test_mode_shapes() {
        let row = [Symbol::Lemon, Symbol::Lemon, Symbol::Lemon];
        assert_eq!(mode(&row), (Symbol::Lemon, 3));

        let row = [Symbol::Star, Symbol::Bell, Symbol::Star];
        assert_eq!(mode(&row), (Symbol::Star, 2));

        let (_, count) = mode(&[Symbol::Bell, Symbol::Cherry, Symbol::Lemon]);
        assert_eq!(count, 1);
    }
}
