//! Key mapping from terminal events to frontend commands.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the frontend to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the engine
    Intent(Intent),
    /// Drop and lock the falling piece at once
    HardLock,
    /// Start a new game (honoured on the game-over screen)
    Restart,
    Quit,
}

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Intent(Intent::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Intent(Intent::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Intent(Intent::SoftDrop))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Intent(Intent::RotateCw)),

        KeyCode::Char(' ') => Some(Command::HardLock),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
