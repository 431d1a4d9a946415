//! Snapshot module - read-only session state handed to renderers
//!
//! A [`GameSnapshot`] is a plain `Copy` value: hosts can keep the previous one
//! around, compare frames, or render it without touching the session.

use crate::game_state::Piece;
use crate::types::{Grid, Rgb, ShapeKind, ShapeMatrix, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a session for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: Option<ActiveSnapshot>,
    pub next: ShapeKind,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: ShapeKind::I,
            paused: false,
            game_over: false,
            seed: 0,
            score: 0,
            lines: 0,
        }
    }
}
