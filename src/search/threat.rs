//! Threat finders: winning moves, live threes, double threats
//!
//! Each finder walks the board in ascending cell-index order, hypothetically
//! places the queried color, tests the placement with the line scanner, and
//! retracts it before moving on. The first qualifying cell wins: callers get
//! "a" threat cell, never "the best" one. The board is deep-equal to its
//! pre-call state after every return path.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::eval::scan_lines;
use crate::rules::is_winning_placement;

/// First cell where placing `color` completes five or more in a row.
#[must_use]
pub fn find_winning_move(board: &mut Board, color: Stone) -> Option<Pos> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        board.place_stone(pos, color);
        let wins = is_winning_placement(board, pos, color);
        board.remove_stone(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}

/// First cell where placing `color` creates a live three: a run of exactly
/// three with both ends open.
#[must_use]
pub fn find_live_three(board: &mut Board, color: Stone) -> Option<Pos> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        board.place_stone(pos, color);
        let lines = scan_lines(board, pos, color);
        board.remove_stone(pos);
        if lines.iter().any(|l| l.run == 3 && l.open_ends >= 2) {
            return Some(pos);
        }
    }
    None
}

/// First cell where placing `color` creates two or more forcing lines at
/// once (each a four, or a live three). Two simultaneous forcing lines
/// overwhelm single-threat defense.
#[must_use]
pub fn find_double_threat(board: &mut Board, color: Stone) -> Option<Pos> {
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        board.place_stone(pos, color);
        let lines = scan_lines(board, pos, color);
        board.remove_stone(pos);
        let threats = lines
            .iter()
            .filter(|l| l.run >= 4 || (l.run == 3 && l.open_ends >= 2))
            .count();
        if threats >= 2 {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_winning_move() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert_eq!(find_winning_move(&mut board, Stone::Black), Some(Pos::new(7, 4)));
        assert_eq!(find_winning_move(&mut board, Stone::White), None);
    }

    #[test]
    fn test_find_winning_move_first_found() {
        let mut board = Board::new();
        // Open four: both (7,2) and (7,7) complete five; scan order picks
        // the lower index.
        for i in 3..7 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert_eq!(find_winning_move(&mut board, Stone::Black), Some(Pos::new(7, 2)));
    }

    #[test]
    fn test_find_live_three_from_open_two() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);

        // (7,6) is the first cell (by index) turning the open two into a
        // live three.
        assert_eq!(find_live_three(&mut board, Stone::Black), Some(Pos::new(7, 6)));
        assert_eq!(find_live_three(&mut board, Stone::White), None);
    }

    #[test]
    fn test_find_live_three_requires_both_ends_open() {
        let mut board = Board::new();
        // Two at the wall: extending makes a three with only one open end
        board.place_stone(Pos::new(7, 0), Stone::Black);
        board.place_stone(Pos::new(7, 1), Stone::Black);
        board.place_stone(Pos::new(7, 3), Stone::White);

        // (7,2) reaches run 3 but the left end hits the wall and the right
        // end is blocked; no other cell reaches run 3 at all.
        assert_eq!(find_live_three(&mut board, Stone::Black), None);
    }

    #[test]
    fn test_find_double_threat_cross() {
        let mut board = Board::new();
        // Horizontal three ending at (7,7) and vertical three ending at
        // (7,7): the crossing cell completes two fours at once.
        for c in 4..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        for r in 4..7 {
            board.place_stone(Pos::new(r, 7), Stone::Black);
        }
        assert_eq!(find_double_threat(&mut board, Stone::Black), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_single_threat_is_not_double() {
        let mut board = Board::new();
        for c in 4..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        // Extending one three to a four is a single forcing line
        assert_eq!(find_double_threat(&mut board, Stone::Black), None);
    }

    #[test]
    fn test_finders_do_not_mutate_board() {
        let mut board = Board::new();
        for c in 4..7 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(8, 8), Stone::White);
        let before = board.clone();

        let _ = find_winning_move(&mut board, Stone::Black);
        assert_eq!(board, before);
        let _ = find_live_three(&mut board, Stone::White);
        assert_eq!(board, before);
        let _ = find_double_threat(&mut board, Stone::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_finders_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(find_winning_move(&mut board, Stone::Black), None);
        assert_eq!(find_live_three(&mut board, Stone::Black), None);
        assert_eq!(find_double_threat(&mut board, Stone::Black), None);
    }
}
