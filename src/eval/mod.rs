//! Position evaluation: line scanning and pattern scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::{best_line, cell_score, evaluate_board, scan_axis, scan_lines, LineRun, DIRECTIONS};
pub use patterns::{score_pattern, PatternScore};
