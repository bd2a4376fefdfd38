use thiserror::Error;

/// Construction failures for a new game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("board width {width} is too small, pieces need at least {min} columns")]
    WidthTooSmall { width: u8, min: u8 },

    #[error("board height {height} is too small, pieces need at least {min} rows")]
    HeightTooSmall { height: u8, min: u8 },

    #[error("board {width}x{height} exceeds the maximum dimension {max}")]
    DimensionTooLarge { width: u8, height: u8, max: u8 },
}
