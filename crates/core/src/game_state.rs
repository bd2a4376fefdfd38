//! Game state module - manages the complete game state
//!
//! This module ties together the board, the shape catalog, the RNG and the
//! scoring rules. It runs the spawn → fall → lock → clear → spawn cycle and
//! the game lifecycle.
//!
//! The engine never reads a clock. Callers feed elapsed time through
//! [`GameState::tick`], so gravity depends only on the level, whatever the
//! caller's frame rate.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::pieces::{rotation_mask, spawn_position, PieceShape, ROTATIONS};
use crate::rng::SimpleRng;
use crate::scoring::{advance_level, fall_interval_ms, line_clear_score};
use crate::snapshot::{GameSnapshot, PieceCell};
use crate::types::{ColorTag, Intent, LockEvent, PieceKind, Phase};
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Rotation index in `0..4`
    pub rotation: u8,
    /// Board column of the 5x5 frame's left edge
    pub x: i32,
    /// Board row of the 5x5 frame's top edge
    pub y: i32,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position for a board this wide
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let (x, y) = spawn_position(board_width);
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Get the mask (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        rotation_mask(self.kind, self.rotation)
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn color(&self) -> ColorTag {
        self.kind.color()
    }

    /// Check if every cell is free on the board
    pub fn fits(&self, board: &Board) -> bool {
        !board.collides(&self.cells())
    }

    /// The piece shifted by (dx, dy), or None if that placement collides
    pub fn try_move(&self, board: &Board, dx: i32, dy: i32) -> Option<Self> {
        let candidate = Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        candidate.fits(board).then_some(candidate)
    }

    /// The piece in its next rotation state at the same anchor, or None if
    /// that collides. No kick offsets are tried.
    pub fn try_rotate(&self, board: &Board) -> Option<Self> {
        let candidate = Self {
            rotation: (self.rotation + 1) % ROTATIONS,
            ..*self
        };
        candidate.fits(board).then_some(candidate)
    }

    /// Check if the piece is resting on the floor or the stack
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.try_move(board, 0, 1).is_none()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Tetromino>,
    next_kind: PieceKind,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Time accumulated since the last automatic fall
    fall_timer_ms: u32,
    phase: Phase,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a new game; the first piece is already falling on return.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// New game on the classic 10x20 board
    pub fn with_seed(seed: u32) -> Self {
        Self::build(GameConfig::default().with_seed(seed))
    }

    fn build(config: GameConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let next_kind = rng.next_kind();

        let mut state = Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            next_kind,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
            fall_timer_ms: 0,
            phase: Phase::Spawning,
            last_event: None,
        };
        state.spawn_piece();
        state
    }

    /// Start over in place: empty board, fresh counters, new piece pair.
    ///
    /// The RNG keeps running, so a restart plays a different sequence.
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = None;
        self.next_kind = self.rng.next_kind();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(1);
        self.fall_timer_ms = 0;
        self.last_event = None;
        self.phase = Phase::Spawning;
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let current_piece_cells = self
            .active
            .map(|piece| {
                piece
                    .cells()
                    .iter()
                    .map(|&(x, y)| PieceCell {
                        x,
                        y,
                        color: piece.color(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            grid: self.board.to_rows(),
            current_piece_cells,
            current_kind: self.active.map(|p| p.kind),
            next_kind: self.next_kind,
            score: self.score,
            level: self.level,
            lines: self.lines,
            fall_interval_ms: self.fall_interval_ms,
            phase: self.phase,
        }
    }

    /// Turn the preview kind into the falling piece and draw a new preview.
    ///
    /// A spawn that collides ends the game (block-out).
    fn spawn_piece(&mut self) -> bool {
        debug_assert_eq!(self.phase, Phase::Spawning);

        let kind = self.next_kind;
        self.next_kind = self.rng.next_kind();

        let piece = Tetromino::spawn(kind, self.board.width());
        if !piece.fits(&self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Each full fall interval moves the piece down one row. When it cannot
    /// descend it locks, the leftover time is discarded and the next piece
    /// spawns.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Falling {
            return;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        while self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms -= self.fall_interval_ms;
            if !self.gravity_step() {
                break;
            }
        }
    }

    /// Move the piece down one row, locking it if it can't.
    /// Returns false once the piece has locked.
    fn gravity_step(&mut self) -> bool {
        let Some(active) = self.active else {
            debug_assert!(false, "falling phase without an active piece");
            return false;
        };

        match active.try_move(&self.board, 0, 1) {
            Some(moved) => {
                self.active = Some(moved);
                true
            }
            None => {
                self.lock_piece();
                false
            }
        }
    }

    /// Apply a player intent. Returns true if the piece changed.
    ///
    /// A move or rotation into a wall or the stack is silently refused and
    /// leaves the state untouched. Outside the falling phase every intent is
    /// a no-op.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            debug_assert!(false, "falling phase without an active piece");
            return false;
        };

        let candidate = match intent {
            Intent::MoveLeft => active.try_move(&self.board, -1, 0),
            Intent::MoveRight => active.try_move(&self.board, 1, 0),
            Intent::RotateCw => active.try_rotate(&self.board),
            Intent::SoftDrop => active.try_move(&self.board, 0, 1),
        };

        match candidate {
            Some(piece) => {
                self.active = Some(piece);
                true
            }
            None if intent == Intent::SoftDrop && self.config.soft_drop_locks => {
                self.lock_piece();
                true
            }
            None => false,
        }
    }

    /// Drop the piece as far as it goes and lock it there.
    /// Returns the number of rows it fell.
    pub fn hard_lock_now(&mut self) -> u32 {
        if self.phase != Phase::Falling {
            return 0;
        }
        let Some(mut piece) = self.active else {
            debug_assert!(false, "falling phase without an active piece");
            return 0;
        };

        let mut dropped = 0;
        while let Some(moved) = piece.try_move(&self.board, 0, 1) {
            piece = moved;
            dropped += 1;
        }
        self.active = Some(piece);
        self.lock_piece();
        dropped
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.cells(), active.color());
        let rows_cleared = self.board.clear_full_rows();

        let points = line_clear_score(rows_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows_cleared as u32);

        let level_before = self.level;
        self.level = advance_level(self.score, self.level);
        if self.level != level_before {
            self.fall_interval_ms = fall_interval_ms(self.level);
        }

        self.last_event = Some(LockEvent {
            rows_cleared: rows_cleared as u32,
            points,
            level_before,
            level_after: self.level,
        });

        self.fall_timer_ms = 0;
        self.phase = Phase::Spawning;
        self.spawn_piece();
    }
}
