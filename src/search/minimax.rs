//! Candidate generation, depth-limited minimax, and the simple fallbacks
//!
//! The minimax is deliberately small: fixed depth 3, alpha-beta pruning,
//! and at most [`MAX_CANDIDATES`] moves per ply taken in generation order.
//! The truncation is a performance/quality tradeoff the engine's move
//! choices depend on, not an optimization to revisit.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::board::{Board, Pos, Stone, CENTER, TOTAL_CELLS};
use crate::eval::{best_line, cell_score, evaluate_board};
use crate::rules::is_winning_placement;

/// Candidate moves per ply, truncated in generation order
pub const MAX_CANDIDATES: usize = 15;

/// Fixed minimax depth (plies)
pub const SEARCH_DEPTH: u8 = 3;

/// Terminal score for a completed five. Dominates any `evaluate_board` sum.
const WIN: i64 = 1_000_000_000;

/// Alpha-beta bounds
const INF: i64 = WIN + 100;

/// Chebyshev radius around occupied cells considered during search
const CANDIDATE_RADIUS: i32 = 2;

/// Empty cells within Chebyshev distance 2 of any stone, in ascending index
/// order. The board center is the sole candidate on an empty board, and is
/// appended whenever it is empty and not already included.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    let mut moves = Vec::with_capacity(64);
    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if board.is_empty(pos) && has_nearby_stone(board, pos) {
            moves.push(pos);
        }
    }

    if board.is_empty(CENTER) && !moves.contains(&CENTER) {
        moves.push(CENTER);
    }
    moves
}

fn has_nearby_stone(board: &Board, pos: Pos) -> bool {
    for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
        for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = i32::from(pos.row) + dr;
            let c = i32::from(pos.col) + dc;
            if Pos::is_valid(r, c) && !board.is_empty(Pos::new(r as u8, c as u8)) {
                return true;
            }
        }
    }
    false
}

/// Depth-3 minimax with alpha-beta pruning, maximizing for `color`.
///
/// Returns `None` only when no candidate exists (full board). The board is
/// restored before every return.
#[must_use]
pub fn search_best_move(board: &mut Board, color: Stone) -> Option<Pos> {
    let mut candidates = candidate_moves(board);
    candidates.truncate(MAX_CANDIDATES);

    let mut best_move = None;
    let mut best_score = -INF;
    let mut alpha = -INF;

    for pos in candidates {
        board.place_stone(pos, color);
        let score = if is_winning_placement(board, pos, color) {
            WIN + i64::from(SEARCH_DEPTH)
        } else {
            minimax(board, color, color.opponent(), SEARCH_DEPTH - 1, alpha, INF)
        };
        board.remove_stone(pos);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
        alpha = alpha.max(score);
    }

    best_move
}

/// Recursive minimax step. Every placement made here is retracted before
/// control returns to the caller, on every exit path.
fn minimax(
    board: &mut Board,
    us: Stone,
    to_move: Stone,
    depth: u8,
    mut alpha: i64,
    mut beta: i64,
) -> i64 {
    if depth == 0 {
        return evaluate_board(board, us);
    }

    let mut candidates = candidate_moves(board);
    candidates.truncate(MAX_CANDIDATES);
    if candidates.is_empty() {
        return evaluate_board(board, us);
    }

    let maximizing = to_move == us;
    let mut best = if maximizing { -INF } else { INF };

    for pos in candidates {
        board.place_stone(pos, to_move);
        let score = if is_winning_placement(board, pos, to_move) {
            // Prefer nearer wins and farther losses
            let terminal = WIN + i64::from(depth);
            if maximizing {
                terminal
            } else {
                -terminal
            }
        } else {
            minimax(board, us, to_move.opponent(), depth - 1, alpha, beta)
        };
        board.remove_stone(pos);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Best cell by the simple low-difficulty score, or `None` when no cell
/// reaches `min_run`.
///
/// For every empty cell, hypothetically place `color` and take the longest
/// run across the axes; cells reaching `min_run` score
/// `2^run * (open_ends + 1)`. This formula is intentionally weaker than the
/// pattern table and must stay distinct from it: unifying the two would
/// change low-tier playing strength. Ties keep the first cell found.
#[must_use]
pub fn find_scored_move(board: &mut Board, color: Stone, min_run: u8) -> Option<Pos> {
    let mut best: Option<(Pos, i64)> = None;

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }
        board.place_stone(pos, color);
        let line = best_line(board, pos, color);
        board.remove_stone(pos);

        if line.run < min_run {
            continue;
        }
        let score = (1i64 << line.run) * (i64::from(line.open_ends) + 1);
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
}

/// [`find_scored_move`] with the low-difficulty fallback: board center if
/// empty, otherwise a uniformly random empty cell. Returns `None` only on a
/// full board.
#[must_use]
pub fn find_best_move(
    board: &mut Board,
    color: Stone,
    min_run: u8,
    rng: &mut StdRng,
) -> Option<Pos> {
    if let Some(pos) = find_scored_move(board, color, min_run) {
        return Some(pos);
    }
    if board.is_empty(CENTER) {
        return Some(CENTER);
    }
    let empties: Vec<Pos> = (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&p| board.is_empty(p))
        .collect();
    empties.choose(rng).copied()
}

/// Defense-leaning one-ply evaluation over the candidate set: for each cell,
/// own placement score plus the opponent's weighted at 1.2x, highest total
/// wins. Integer weights (10 and 12) keep the comparison exact.
#[must_use]
pub fn evaluate_best_move(board: &mut Board, color: Stone) -> Option<Pos> {
    let opponent = color.opponent();
    let mut best: Option<(Pos, i64)> = None;

    for pos in candidate_moves(board) {
        board.place_stone(pos, color);
        let own = cell_score(board, pos, color);
        board.remove_stone(pos);

        board.place_stone(pos, opponent);
        let opp = cell_score(board, pos, opponent);
        board.remove_stone(pos);

        let score = own * 10 + opp * 12;
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((pos, score)),
        }
    }

    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_candidates_empty_board_is_center() {
        let board = Board::new();
        assert_eq!(candidate_moves(&board), vec![CENTER]);
    }

    #[test]
    fn test_candidates_radius_two() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);

        let moves = candidate_moves(&board);
        // 5x5 neighborhood minus the occupied center
        assert_eq!(moves.len(), 24);
        assert!(moves.iter().all(|p| {
            let dr = (i32::from(p.row) - 7).abs();
            let dc = (i32::from(p.col) - 7).abs();
            dr.max(dc) <= 2 && board.is_empty(*p)
        }));
        // Ascending index order
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_candidates_include_center_far_from_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);

        let moves = candidate_moves(&board);
        assert!(moves.contains(&CENTER));
        // Appended last since it is outside the radius of (0,0)
        assert_eq!(*moves.last().unwrap(), CENTER);
    }

    #[test]
    fn test_search_takes_immediate_win() {
        let mut board = Board::new();
        // Black four at row 0, cols 2-5: either (0,1) or (0,6) completes
        // five; the candidate truncation keeps both in reach.
        for i in 0..4 {
            board.place_stone(Pos::new(0, i + 2), Stone::Black);
        }
        board.place_stone(Pos::new(3, 10), Stone::White);
        board.place_stone(Pos::new(3, 11), Stone::White);

        assert_eq!(search_best_move(&mut board, Stone::Black), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_search_blocks_forced_loss() {
        let mut board = Board::new();
        // Black four against the wall; White must take the single open end
        for i in 0..4 {
            board.place_stone(Pos::new(0, i), Stone::Black);
        }
        board.place_stone(Pos::new(5, 5), Stone::White);

        assert_eq!(search_best_move(&mut board, Stone::White), Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let before = board.clone();

        let _ = search_best_move(&mut board, Stone::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_scored_move_threshold() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);

        // Extending the pair reaches run 3; nothing reaches run 4
        assert!(find_scored_move(&mut board, Stone::Black, 3).is_some());
        assert_eq!(find_scored_move(&mut board, Stone::Black, 4), None);
    }

    #[test]
    fn test_scored_move_prefers_open_extension() {
        let mut board = Board::new();
        // Pair against the wall and a free pair: the free pair extends with
        // more open ends and wins on score.
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);

        let pos = find_scored_move(&mut board, Stone::Black, 3).unwrap();
        assert_eq!(pos.row, 7);
    }

    #[test]
    fn test_find_best_move_center_fallback() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);

        let mut rng = StdRng::seed_from_u64(1);
        // Nothing reaches run 5, center is empty
        assert_eq!(find_best_move(&mut board, Stone::White, 5, &mut rng), Some(CENTER));
    }

    #[test]
    fn test_find_best_move_random_is_seeded() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = find_best_move(&mut board, Stone::White, 5, &mut rng_a);
        let b = find_best_move(&mut board, Stone::White, 5, &mut rng_b);
        assert_eq!(a, b);
        assert!(a.is_some());
        assert!(board.is_empty(a.unwrap()));
    }

    #[test]
    fn test_find_best_move_full_board_none() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if (idx + idx / 15) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone);
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(find_best_move(&mut board, Stone::Black, 1, &mut rng), None);
    }

    #[test]
    fn test_evaluate_best_move_blocks_strong_threat() {
        let mut board = Board::new();
        // Black open three; White's best one-ply cell is one of its ends
        for c in 1..4 {
            board.place_stone(Pos::new(1, c), Stone::Black);
        }
        board.place_stone(Pos::new(10, 10), Stone::White);

        let pos = evaluate_best_move(&mut board, Stone::White).unwrap();
        assert!(pos == Pos::new(1, 0) || pos == Pos::new(1, 4), "got {pos:?}");
    }

    #[test]
    fn test_fallback_helpers_restore_board() {
        let mut board = Board::new();
        for c in 1..4 {
            board.place_stone(Pos::new(1, c), Stone::Black);
        }
        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(9);

        let _ = find_scored_move(&mut board, Stone::White, 1);
        let _ = find_best_move(&mut board, Stone::White, 1, &mut rng);
        let _ = evaluate_best_move(&mut board, Stone::White);
        assert_eq!(board, before);
    }
}
