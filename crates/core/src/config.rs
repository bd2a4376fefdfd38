//! Game configuration.
//!
//! Deserializable so frontends can load it from a JSON file; every field has
//! a default, so a partial file like `{"width": 12}` is enough.

use serde::Deserialize;

use crate::error::GameError;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION, MIN_BOARD_HEIGHT,
    MIN_BOARD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// RNG seed for the piece sequence
    pub seed: u32,
    /// Lock the piece when a soft drop is blocked instead of ignoring it.
    pub soft_drop_locks: bool,
}

impl GameConfig {
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Reject boards no piece can be played on.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width > MAX_BOARD_DIMENSION || self.height > MAX_BOARD_DIMENSION {
            return Err(GameError::DimensionTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_DIMENSION,
            });
        }
        if self.width < MIN_BOARD_WIDTH {
            return Err(GameError::WidthTooSmall {
                width: self.width,
                min: MIN_BOARD_WIDTH,
            });
        }
        if self.height < MIN_BOARD_HEIGHT {
            return Err(GameError::HeightTooSmall {
                height: self.height,
                min: MIN_BOARD_HEIGHT,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
            soft_drop_locks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_playfield() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert!(!config.soft_drop_locks);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_narrow_and_short_boards() {
        assert_eq!(
            GameConfig::with_size(3, 20).validate(),
            Err(GameError::WidthTooSmall { width: 3, min: 4 })
        );
        assert_eq!(
            GameConfig::with_size(10, 3).validate(),
            Err(GameError::HeightTooSmall { height: 3, min: 4 })
        );
        assert!(GameConfig::with_size(4, 4).validate().is_ok());
    }

    #[test]
    fn rejects_oversized_boards() {
        assert!(matches!(
            GameConfig::with_size(65, 20).validate(),
            Err(GameError::DimensionTooLarge { max: 64, .. })
        ));
    }

    #[test]
    fn deserializes_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"width": 12, "soft_drop_locks": true}"#)
            .expect("valid config json");
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, 1);
        assert!(config.soft_drop_locks);
    }
}
