//! Pattern scores for Gomoku evaluation
//!
//! One fixed, ordered rule table maps a (run length, open ends) pair to a
//! score. Every search tier scores through this table; the only other
//! scoring formula in the crate is the deliberately simpler one kept by
//! `search::find_best_move` for low-difficulty play.

/// Pattern scores keyed by run length and open ends
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win
    pub const FIVE: i64 = 100_000;
    /// Four with at least one open end (one move from five)
    pub const OPEN_FOUR: i64 = 10_000;
    /// Four with both ends blocked
    pub const CLOSED_FOUR: i64 = 1_000;
    /// Open three: _OOO_ (two ways to reach an open four)
    pub const OPEN_THREE: i64 = 1_000;
    /// Three with one open end
    pub const CLOSED_THREE: i64 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i64 = 100;
    /// Two with one open end
    pub const CLOSED_TWO: i64 = 10;
}

/// Score a (run, open_ends) pair. First matching row wins; anything weaker
/// than the named patterns falls back to `run^2 * (open_ends + 1)`.
#[inline]
#[must_use]
pub fn score_pattern(run: u8, open_ends: u8) -> i64 {
    match (run, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 1..) => PatternScore::OPEN_FOUR,
        (4, 0) => PatternScore::CLOSED_FOUR,
        (3, 2..) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2..) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (run, open_ends) => i64::from(run) * i64::from(run) * (i64::from(open_ends) + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table_exact() {
        assert_eq!(score_pattern(5, 0), 100_000);
        assert_eq!(score_pattern(6, 2), 100_000);
        assert_eq!(score_pattern(4, 1), 10_000);
        assert_eq!(score_pattern(4, 2), 10_000);
        assert_eq!(score_pattern(4, 0), 1_000);
        assert_eq!(score_pattern(3, 2), 1_000);
        assert_eq!(score_pattern(3, 1), 100);
        assert_eq!(score_pattern(2, 2), 100);
        assert_eq!(score_pattern(2, 1), 10);
    }

    #[test]
    fn test_fallback_formula() {
        // Weak shapes score run^2 * (open_ends + 1)
        assert_eq!(score_pattern(1, 0), 1);
        assert_eq!(score_pattern(1, 1), 2);
        assert_eq!(score_pattern(1, 2), 3);
        assert_eq!(score_pattern(2, 0), 4);
        assert_eq!(score_pattern(3, 0), 9);
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        // A four with an open end must dominate any accumulation of
        // smaller patterns across the four axes.
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > 4 * PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert_eq!(PatternScore::CLOSED_FOUR, PatternScore::OPEN_THREE);
    }
}
