//! Line scanner and board evaluation
//!
//! The scanner is the one primitive everything else builds on: given a cell
//! and a color, it walks each of the four axes and reports the run through
//! the cell plus the open ends beyond the run. The cell itself always counts
//! as `color`, whether or not a stone has actually been placed there, so
//! hypothetical placements can be scored without touching the board.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

use super::patterns::score_pattern;

/// Direction vectors for line checking (4 axes; each covers both senses)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Run through a cell along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Consecutive same-color stones through the cell (the cell included)
    pub run: u8,
    /// Empty cells immediately beyond the ends of the run (0, 1, or 2)
    pub open_ends: u8,
}

/// Scan one axis through `pos` for `color`.
///
/// Walks up to 4 cells in each sense while stones match, then checks the
/// first cell past each end of the run for emptiness.
#[must_use]
pub fn scan_axis(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> LineRun {
    let (dr, dc) = dir;
    let mut run = 1u8;
    let mut open_ends = 0u8;

    for sense in [1i32, -1i32] {
        let mut r = i32::from(pos.row) + dr * sense;
        let mut c = i32::from(pos.col) + dc * sense;
        let mut steps = 0;
        while steps < 4 && Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            run += 1;
            steps += 1;
            r += dr * sense;
            c += dc * sense;
        }
        if Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Stone::Empty {
            open_ends += 1;
        }
    }

    LineRun { run, open_ends }
}

/// Scan all four axes through `pos` for `color`.
#[must_use]
pub fn scan_lines(board: &Board, pos: Pos, color: Stone) -> [LineRun; 4] {
    let mut lines = [LineRun::default(); 4];
    for (i, &dir) in DIRECTIONS.iter().enumerate() {
        lines[i] = scan_axis(board, pos, dir, color);
    }
    lines
}

/// The strongest axis through `pos` for `color`: longest run, open ends as
/// the tie-break.
#[must_use]
pub fn best_line(board: &Board, pos: Pos, color: Stone) -> LineRun {
    let mut best = LineRun::default();
    for &dir in &DIRECTIONS {
        let line = scan_axis(board, pos, dir, color);
        if line.run > best.run || (line.run == best.run && line.open_ends > best.open_ends) {
            best = line;
        }
    }
    best
}

/// Pattern score of placing `color` at `pos`: the table score summed over
/// all four axes.
#[must_use]
pub fn cell_score(board: &Board, pos: Pos, color: Stone) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&dir| {
            let line = scan_axis(board, pos, dir, color);
            score_pattern(line.run, line.open_ends)
        })
        .sum()
}

/// Static full-board heuristic from `color`'s perspective: over every empty
/// cell, own placement score minus opponent placement score. Used as the
/// minimax leaf evaluation.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i64 {
    let opponent = color.opponent();
    let mut score = 0i64;
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        score += cell_score(board, pos, color) - cell_score(board, pos, opponent);
    }
    score
}
