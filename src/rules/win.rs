//! Win condition checking
//!
//! Win detection is always relative to the color that just moved, at the
//! location just played: five or more contiguous same-colored stones along
//! any of the four axes through that cell. No full-board rescan is needed.

use crate::board::{Board, Pos, Stone};
use crate::eval::{scan_axis, DIRECTIONS};

/// Check whether `color` at `pos` completes five or more in a row.
///
/// The cell itself counts as `color`, so this works both before the stone
/// is placed (hypothetical check) and after.
#[must_use]
pub fn is_winning_placement(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| scan_axis(board, pos, dir, color).run >= 5)
}

/// The contiguous winning cells through `pos` for `color`, sorted by index,
/// or empty if no axis reaches five. Used by the caller to highlight the
/// winning line.
#[must_use]
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Vec<Pos> {
    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        for sense in [1i32, -1i32] {
            for step in 1..5 {
                let r = i32::from(pos.row) + dr * step * sense;
                let c = i32::from(pos.col) + dc * step * sense;
                if !Pos::is_valid(r, c) {
                    break;
                }
                let next = Pos::new(r as u8, c as u8);
                if board.get(next) == color {
                    line.push(next);
                } else {
                    break;
                }
            }
        }

        if line.len() >= 5 {
            line.sort();
            return line;
        }
    }
    Vec::new()
}
