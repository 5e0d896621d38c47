//! Gomoku (five-in-a-row) AI engine for a 15x15 board.
//!
//! The crate is split the way the engine thinks:
//!
//! - [`board`]: the 15x15 grid, stones, and position arithmetic.
//! - [`eval`]: directional line scanning and the pattern score table.
//! - [`rules`]: win detection for a placement.
//! - [`search`]: threat finders, candidate generation, one-ply evaluation,
//!   and depth-3 alpha-beta search.
//! - [`engine`]: the difficulty tiers wiring it all together.
//!
//! Most callers only need [`Engine::compute_move`]:
//!
//! ```
//! use gomoku_ai::{Board, Difficulty, Engine, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::with_seed(42);
//!
//! // Black opens; an empty board is always answered with the center.
//! let opening = engine.compute_move(&mut board, Stone::Black, Difficulty::Hard).unwrap();
//! assert_eq!(opening, gomoku_ai::CENTER);
//! board.place_stone(opening, Stone::Black);
//!
//! let reply = engine.compute_move(&mut board, Stone::White, Difficulty::Hard).unwrap();
//! board.place_stone(reply, Stone::White);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER, TOTAL_CELLS};
pub use engine::{Difficulty, Engine};
pub use rules::{is_winning_placement, winning_line};
