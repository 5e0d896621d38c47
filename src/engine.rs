//! Tiered move selection
//!
//! Each difficulty is a strictly ordered fallback chain over the threat
//! finders and searches, terminating at the first rule that yields a cell:
//!
//! - **Easy**: own win, block opponent win, block opponent live three,
//!   scored move (run >= 3), scored move (run >= 1, with fallback).
//! - **Medium**: own win, block opponent win, block opponent double threat,
//!   own live three, block opponent live three, one-ply evaluation with the
//!   opponent weighted 1.2x.
//! - **Hard**: own win, block opponent win, block opponent double threat,
//!   own double threat, own live three, block opponent live three, depth-3
//!   alpha-beta over the candidate set.
//!
//! Easy deliberately ignores double threats: the tiers are meant to differ
//! in defensive strength, not just search depth.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone, CENTER};
use crate::search::{
    evaluate_best_move, find_best_move, find_double_threat, find_live_three, find_scored_move,
    find_winning_move, search_best_move,
};

/// AI strength tier. Selects the fallback chain, not evaluator constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Move-selection engine.
///
/// Holds only the RNG used for the low-tier random fallback; all position
/// state lives on the caller's [`Board`]. The board is mutated during the
/// computation (hypothetical placements) but is always restored before the
/// call returns. Calls must be serialized by the caller; there is no
/// internal locking.
///
/// # Example
///
/// ```
/// use gomoku_ai::{Board, Difficulty, Engine, Pos, Stone};
///
/// let mut board = Board::new();
/// let mut engine = Engine::with_seed(7);
///
/// board.place_stone(Pos::new(7, 7), Stone::Black);
/// if let Some(pos) = engine.compute_move(&mut board, Stone::White, Difficulty::Medium) {
///     board.place_stone(pos, Stone::White);
/// }
/// ```
pub struct Engine {
    rng: StdRng,
}

impl Engine {
    /// Engine with OS-seeded randomness (production default).
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a fixed seed for deterministic play in tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Decide a move for `color` at the given difficulty.
    ///
    /// Returns `None` only when the board is full (a draw, not an error);
    /// the check is O(1) and happens before any search. An empty board is
    /// always answered with the center cell.
    #[must_use]
    pub fn compute_move(
        &mut self,
        board: &mut Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> Option<Pos> {
        debug_assert!(color != Stone::Empty, "color to move must be Black or White");

        if board.is_full() {
            return None;
        }
        if board.is_board_empty() {
            return Some(CENTER);
        }

        let opponent = color.opponent();

        match difficulty {
            Difficulty::Easy => {
                if let Some(pos) = find_winning_move(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_winning_move(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_live_three(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_scored_move(board, color, 3) {
                    return Some(pos);
                }
                find_best_move(board, color, 1, &mut self.rng)
            }
            Difficulty::Medium => {
                if let Some(pos) = find_winning_move(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_winning_move(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_double_threat(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_live_three(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_live_three(board, opponent) {
                    return Some(pos);
                }
                evaluate_best_move(board, color)
            }
            Difficulty::Hard => {
                if let Some(pos) = find_winning_move(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_winning_move(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_double_threat(board, opponent) {
                    return Some(pos);
                }
                if let Some(pos) = find_double_threat(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_live_three(board, color) {
                    return Some(pos);
                }
                if let Some(pos) = find_live_three(board, opponent) {
                    return Some(pos);
                }
                search_best_move(board, color)
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
