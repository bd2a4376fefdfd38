//! Classic Tetris (workspace facade crate).
//!
//! The simulation lives in `classic_tetris::core`; `input` and `term` make up
//! the terminal frontend used by the default binary.

pub mod cli;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
