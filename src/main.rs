//! Terminal Tetris runner (default binary).
//!
//! Usage: `classic-tetris [--width N] [--height N] [--seed N] [--soft-drop-locks] [--config FILE]`

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use classic_tetris::cli::parse_args;
use classic_tetris::core::GameState;
use classic_tetris::input::{handle_key_event, Command};
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::TICK_MS;

/// How long the title screen stays up without a key press
const TITLE_SCREEN_MS: u64 = 3000;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    let game_state = GameState::new(config).context("create game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match show_title_screen(&mut term) {
        Ok(true) => run(&mut term, game_state),
        Ok(false) => Ok(()),
        Err(err) => Err(err),
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Show the title until any key or the timeout. Returns false on quit.
fn show_title_screen(term: &mut TerminalRenderer) -> Result<bool> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let deadline = Instant::now() + Duration::from_millis(TITLE_SCREEN_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_title_into(Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let Some(timeout) = deadline.checked_duration_since(Instant::now()) else {
            return Ok(true);
        };
        if event::poll(timeout.min(Duration::from_millis(TICK_MS as u64)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(handle_key_event(key) != Some(Command::Quit));
                }
            }
        }
    }
}

fn run(term: &mut TerminalRenderer, mut game_state: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Auto-repeat counts as a fresh press; releases are ignored.
                if key.kind != KeyEventKind::Release {
                    match handle_key_event(key) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Restart) if game_state.is_game_over() => game_state.reset(),
                        Some(Command::Intent(intent)) => {
                            game_state.apply_intent(intent);
                        }
                        Some(Command::HardLock) => {
                            game_state.hard_lock_now();
                        }
                        _ => {}
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
