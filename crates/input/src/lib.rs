//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`Command`]s. Player moves become
//! [`crate::types::Intent`]s for the engine; the rest (hard lock, restart,
//! quit) are handled by the frontend loop.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, Command};
