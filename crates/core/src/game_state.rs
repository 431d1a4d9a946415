//! Game state module - manages the complete session state
//!
//! This module ties together the board, the shape source and scoring.
//! It handles the drop timer, command application, locking, line clears
//! and game-over detection.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::rng::ShapeQueue;
use crate::scoring::line_clear_score;
use crate::shapes::{get_shape, rotate_shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Current orientation (post-rotation)
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn origin
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            matrix: get_shape(kind).matrix,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn id(&self) -> Cell {
        self.kind.id()
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Check if the piece fits the board at its current origin
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(&self.matrix, self.x, self.y)
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    /// Terminal: a respawned piece did not fit.
    GameOver,
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    queue: ShapeQueue,
    phase: GamePhase,
    paused: bool,
    score: u32,
    lines: u32,
    /// Time of the last automatic descent; `None` re-samples on the next tick.
    last_drop_ms: Option<u64>,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new session with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_queue(config, ShapeQueue::new(config.seed))
    }

    /// Create a session drawing shapes from `queue`
    pub fn with_queue(config: GameConfig, queue: ShapeQueue) -> Self {
        Self::with_board(config, queue, Board::new())
    }

    /// Create a session on a prepared board.
    ///
    /// The first piece is placed without a validity check; only respawns after a
    /// lock can end the game.
    pub fn with_board(config: GameConfig, mut queue: ShapeQueue, board: Board) -> Self {
        let first = Piece::new(queue.draw());
        info!(
            "session started: seed={} drop_interval_ms={} first={}",
            config.seed,
            config.drop_interval_ms,
            first.kind.as_str()
        );

        Self {
            config,
            board,
            active: Some(first),
            queue,
            phase: GamePhase::Running,
            paused: false,
            score: 0,
            lines: 0,
            last_drop_ms: None,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_shape(&self) -> ShapeKind {
        self.queue.peek()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.queue.peek();
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.seed = self.queue.seed();
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance one host frame: apply `commands` in order, then run the drop timer.
    pub fn step<I>(&mut self, commands: I, now_ms: u64) -> GameSnapshot
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply_command(command);
        }
        self.tick(now_ms);
        self.snapshot()
    }

    /// Apply a command. Returns false when it was rejected (a silent no-op).
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over() {
            return false;
        }

        match command {
            Command::Pause => self.toggle_pause(),
            _ if self.paused => false,
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::MoveDown => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if !self.paused {
            self.last_drop_ms = None;
        }
        debug!("paused={}", self.paused);
        true
    }

    /// Run the drop timer against the host's monotonic clock.
    ///
    /// A descent fires only once strictly more than the interval has passed since
    /// the previous one. A descent that does not fit locks the piece instead.
    /// Returns true when the piece moved or locked.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.game_over() || self.paused {
            return false;
        }

        let last = *self.last_drop_ms.get_or_insert(now_ms);
        if now_ms.saturating_sub(last) <= self.config.drop_interval_ms as u64 {
            return false;
        }

        self.last_drop_ms = Some(now_ms);
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let x = active.x + dx;
        let y = active.y + dy;
        if !self.board.is_valid_position(&active.matrix, x, y) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        true
    }

    /// Try to rotate the active piece in place (no wall kicks)
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let matrix = rotate_shape(&active.matrix);
        if !self.board.is_valid_position(&matrix, active.x, active.y) {
            return false;
        }

        self.active = Some(Piece { matrix, ..active });
        true
    }

    /// Drop the active piece as far as it fits, then lock it.
    pub(crate) fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }

        while self.try_move(0, 1) {}
        self.lock_piece();
        self.last_drop_ms = None;
        true
    }

    /// Lock the active piece onto the board, clear rows, score and respawn.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(&active.matrix, active.x, active.y, active.id());

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();
        let score_delta = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        debug!(
            "locked {} at ({}, {}), cleared rows {:?}, +{} points",
            active.kind.as_str(),
            active.x,
            active.y,
            cleared_rows.as_slice(),
            score_delta
        );

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            score_delta,
            game_over: !spawned,
        });
    }

    /// Spawn the next shape at the spawn origin.
    ///
    /// Ends the game if it does not fit; the rejected piece is not kept as active.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::new(self.queue.draw());

        if !piece.is_valid(&self.board) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            info!(
                "game over: {} blocked at spawn, score={} lines={}",
                piece.kind.as_str(),
                self.score,
                self.lines
            );
            return false;
        }

        debug!("spawned {}", piece.kind.as_str());
        self.active = Some(piece);
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a fresh session with the next seed.
    pub fn restart(&mut self) {
        info!(
            "restart: score={} lines={} next_seed={}",
            self.score,
            self.lines,
            self.config.seed.wrapping_add(1)
        );
        let config = GameConfig {
            seed: self.config.seed.wrapping_add(1),
            ..self.config
        };
        *self = Self::new(config);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
