//! Search: threat detection and depth-limited minimax

pub mod minimax;
pub mod threat;

pub use minimax::{candidate_moves, evaluate_best_move, find_best_move, find_scored_move, search_best_move, MAX_CANDIDATES, SEARCH_DEPTH};
pub use threat::{find_double_threat, find_live_three, find_winning_move};
