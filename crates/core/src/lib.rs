//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and simulation
//! logic. It has **no** dependency on UI, terminal or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: rules are checked by unit tests in every module
//! - **Portable**: runs under any frontend, or headless
//!
//! # Module Structure
//!
//! - [`board`]: W x H board with collision detection and line clearing
//! - [`game_state`]: the falling piece and the spawn/fall/lock/clear cycle
//! - [`pieces`]: the shape catalog, four fixed masks per kind
//! - [`rng`]: seedable uniform piece generation
//! - [`scoring`]: classic line-clear table and level progression
//! - [`snapshot`]: read-only views for collaborators
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece kind is drawn independently
//! - **Rotation**: four fixed masks per kind, refused in place on collision
//! - **Locking**: a piece locks as soon as gravity cannot move it down
//! - **Scoring**: 100/300/500/800 per lock for 1-4 rows
//! - **Levels**: +1 per 1000 points, gravity 100ms faster per level
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::{GameConfig, GameState};
//! use classic_tetris_types::{Intent, Phase};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//!
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::RotateCw);
//! game.tick(1000);
//!
//! assert_eq!(game.phase(), Phase::Falling);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with the time
//! elapsed since the previous call. Gravity fires once per fall interval:
//! 1000ms at level 1, minus 100ms per level, never below 100ms.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::GameError;
pub use game_state::{GameState, Tetromino};
pub use pieces::{rotation_mask, PieceShape};
pub use rng::SimpleRng;
pub use scoring::{advance_level, fall_interval_ms, line_clear_score};
pub use snapshot::{GameSnapshot, PieceCell};
