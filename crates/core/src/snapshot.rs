//! Read-only views of the engine handed to collaborators.

use serde::Serialize;

use crate::types::{Cell, ColorTag, PieceKind, Phase};

/// One occupied cell of the falling piece, in board coordinates.
///
/// `y` may be negative while the piece still pokes out above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceCell {
    pub x: i32,
    pub y: i32,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, rows top to bottom
    pub grid: Vec<Vec<Cell>>,
    pub current_piece_cells: Vec<PieceCell>,
    pub current_kind: Option<PieceKind>,
    pub next_kind: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Color at (x, y): the falling piece wins over the locked grid
    pub fn color_at(&self, x: i32, y: i32) -> Cell {
        if let Some(cell) = self
            .current_piece_cells
            .iter()
            .find(|c| c.x == x && c.y == y)
        {
            return Some(cell.color);
        }
        if x < 0 || y < 0 {
            return None;
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }
}
