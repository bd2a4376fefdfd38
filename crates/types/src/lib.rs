//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be shared by the engine,
//! the terminal frontend and any other collaborator that reads snapshots.
//!
//! # Board Dimensions
//!
//! The classic playfield is 10 columns by 20 rows. Other sizes are accepted
//! as long as they fall within [`MIN_BOARD_WIDTH`]..=[`MAX_BOARD_DIMENSION`]
//! and [`MIN_BOARD_HEIGHT`]..=[`MAX_BOARD_DIMENSION`].
//!
//! # Timing and Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frontend tick interval (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Gravity interval floor |
//! | `POINTS_PER_LEVEL` | 1000 | Score needed per level step |
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{ColorTag, PieceKind, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), ColorTag::Purple);
//! assert_eq!(PieceKind::ALL[PieceKind::Z.index()], PieceKind::Z);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Narrowest board every spawn orientation fits into
pub const MIN_BOARD_WIDTH: u8 = 4;

/// Shortest board every spawn orientation fits into
pub const MIN_BOARD_HEIGHT: u8 = 4;

/// Upper bound for either board dimension
pub const MAX_BOARD_DIMENSION: u8 = 64;

/// Side length of the local frame every rotation mask lives in
pub const SHAPE_FRAME: i32 = 5;

/// Fixed frontend tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (one row per second)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval reduction per level
pub const FALL_STEP_MS: u32 = 100;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 100;

/// Score required per level: level N is left once score reaches N * 1000
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Points per lock event, indexed by rows cleared (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Display color every cell of this kind is locked with
    pub fn color(&self) -> ColorTag {
        match self {
            PieceKind::I => ColorTag::Cyan,
            PieceKind::O => ColorTag::Yellow,
            PieceKind::T => ColorTag::Purple,
            PieceKind::L => ColorTag::Blue,
            PieceKind::J => ColorTag::Orange,
            PieceKind::S => ColorTag::Green,
            PieceKind::Z => ColorTag::Red,
        }
    }
}

/// Display color tag carried by occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

impl ColorTag {
    /// 24-bit color as `(r, g, b)`
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTag::Cyan => (0, 255, 255),
            ColorTag::Yellow => (255, 255, 0),
            ColorTag::Purple => (128, 0, 128),
            ColorTag::Blue => (0, 0, 255),
            ColorTag::Orange => (255, 165, 0),
            ColorTag::Green => (0, 255, 0),
            ColorTag::Red => (255, 0, 0),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ColorTag)`: Cell occupied by a locked block of that color
pub type Cell = Option<ColorTag>;

/// Player intents accepted while a piece is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece to the next rotation state
    RotateCw,
    /// Move piece one cell down
    SoftDrop,
}

/// Engine lifecycle phase
///
/// `Spawning` is transient: it is entered at game start and after every
/// lock, and is left before control returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Spawning,
    Falling,
    GameOver,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
    pub level_before: u32,
    pub level_after: u32,
}

impl LockEvent {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}
