//! Board module - manages the game grid
//!
//! The board is a W x H grid where each cell is empty or occupied with a color.
//! Uses a flat row-major vector; the size is fixed once the board is built.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom,
//! so row `height - 1` is the floor row.
//!
//! Piece cells may sit above the visible board (y < 0). Such cells never
//! collide and are dropped when a piece locks.

use crate::types::{Cell, ColorTag};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Dimensions are validated by [`crate::GameConfig`]. A zero dimension
    /// is raised to 1 so every row has at least one cell.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff any cell is left of, right of or below the board, or lands
    /// on an occupied cell. Cells above the board never collide.
    pub fn collides(&self, cells: &[(i32, i32)]) -> bool {
        cells.iter().any(|&(x, y)| {
            x < 0
                || x >= self.width as i32
                || y >= self.height as i32
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Write `color` into every on-board cell; cells with y < 0 are dropped.
    ///
    /// No collision check is made here, callers test [`Board::collides`] first.
    pub fn lock(&mut self, cells: &[(i32, i32)], color: ColorTag) {
        for &(x, y) in cells {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow row `y`, or None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Remove row `y`, shifting every row above it down by one and
    /// emptying row 0.
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Rows are scanned bottom to top. After a removal the same index is
    /// examined again, since the row shifted into it may be full as well.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid out as rows, top to bottom
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, color: ColorTag) {
        for x in 0..board.width() as i32 {
            board.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_collides_bounds_and_stack() {
        let mut board = Board::new(6, 8);
        assert!(!board.collides(&[(0, 0), (5, 7)]));
        assert!(board.collides(&[(-1, 3)]));
        assert!(board.collides(&[(6, 3)]));
        assert!(board.collides(&[(2, 8)]));

        // Above-board space is unconstrained.
        assert!(!board.collides(&[(2, -1), (2, -7)]));

        board.set(2, 4, Some(ColorTag::Red));
        assert!(board.collides(&[(2, 4)]));
        assert!(!board.collides(&[(3, 4)]));
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new(6, 8);
        board.lock(&[(1, -2), (1, -1), (1, 0), (1, 1)], ColorTag::Cyan);

        assert_eq!(board.get(1, 0), Some(Some(ColorTag::Cyan)));
        assert_eq!(board.get(1, 1), Some(Some(ColorTag::Cyan)));
        let occupied = board.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn test_clear_cascading_non_adjacent_rows() {
        let mut board = Board::new(4, 6);
        fill_row(&mut board, 5, ColorTag::Red);
        board.set(0, 4, Some(ColorTag::Blue));
        fill_row(&mut board, 3, ColorTag::Green);
        board.set(3, 2, Some(ColorTag::Yellow));

        assert_eq!(board.clear_full_rows(), 2);

        // Non-full rows keep their order, each shifted by the full rows below.
        assert_eq!(board.get(0, 5), Some(Some(ColorTag::Blue)));
        assert_eq!(board.get(3, 4), Some(Some(ColorTag::Yellow)));
        let occupied = board.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(occupied, 2);
        assert!((0..6).all(|y| !board.is_row_full(y)));
    }

    #[test]
    fn test_clear_adjacent_rows_rechecks_same_index() {
        let mut board = Board::new(4, 6);
        for y in 2..6 {
            fill_row(&mut board, y, ColorTag::Cyan);
        }
        board.set(1, 1, Some(ColorTag::Purple));

        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.get(1, 5), Some(Some(ColorTag::Purple)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_zero_dimensions_raised_to_one() {
        let mut narrow = Board::new(0, 3);
        assert_eq!((narrow.width(), narrow.height()), (1, 3));
        assert_eq!(narrow.to_rows().len(), 3);
        assert_eq!(narrow.clear_full_rows(), 0);

        let flat = Board::new(3, 0);
        assert_eq!((flat.width(), flat.height()), (3, 1));
        assert_eq!(flat.rows().count(), 1);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1, 1);
        assert!(board.collides(&[(0, 1)]));
        board.lock(&[(0, 0)], ColorTag::Green);
        assert!(board.is_row_full(0));
        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.get(0, 0), Some(None));
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut board = Board::new(5, 5);
        fill_row(&mut board, 4, ColorTag::Orange);
        board.reset();
        assert!(board.cells().iter().all(|c| c.is_none()));
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
    }
}
