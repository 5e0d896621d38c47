//! Flat-array board with an occupied counter

use super::{Pos, Stone, TOTAL_CELLS};

/// Game board: 225 cells in row-major order.
///
/// The board is the sole shared state between move generation and the
/// caller. Search routines mutate it in place with strict place/remove
/// symmetry, so it is deep-equal to its pre-call state after every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    occupied: u16,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            occupied: 0,
        }
    }

    /// Build a board from a plain 225-element array (the caller-side format).
    pub fn from_cells(cells: [Stone; TOTAL_CELLS]) -> Self {
        let occupied = cells.iter().filter(|&&s| s != Stone::Empty).count() as u16;
        Self { cells, occupied }
    }

    /// Raw cell array, row-major
    #[inline]
    pub fn cells(&self) -> &[Stone; TOTAL_CELLS] {
        &self.cells
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Stone::Empty
    }

    /// Place a stone. The cell must be empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if stone == Stone::Empty {
            return;
        }
        debug_assert!(self.is_empty(pos), "cell already occupied");
        self.cells[pos.to_index()] = stone;
        self.occupied += 1;
    }

    /// Remove a stone (no-op on an empty cell)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        if self.cells[pos.to_index()] != Stone::Empty {
            self.cells[pos.to_index()] = Stone::Empty;
            self.occupied -= 1;
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u16 {
        self.occupied
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Check if every cell is occupied. O(1).
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
