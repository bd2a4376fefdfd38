//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It reads engine snapshots,
//! renders them into a framebuffer and flushes that to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep view code pure so it can be unit-tested
//! - Draw board cells 2 columns wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use classic_tetris_core as core;
pub use classic_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
