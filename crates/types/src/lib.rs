//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the terminal renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn origin**: (3, 0) for every shape
//!
//! # Cell Identifiers
//!
//! The grid stores one `u8` per cell: `0` is empty, `1..=7` is the catalog
//! identifier of the shape that was locked there.
//!
//! | Id | Shape | Color |
//! |----|-------|-------|
//! | 1 | I | cyan |
//! | 2 | J | blue |
//! | 3 | L | orange |
//! | 4 | O | yellow |
//! | 5 | S | green |
//! | 6 | T | purple |
//! | 7 | Z | red |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_id(1).unwrap();
//! assert_eq!(kind, ShapeKind::I);
//! assert_eq!(kind.id(), 1);
//!
//! assert_eq!(ShapeKind::from_id(0), None);
//! assert_ne!(Command::MoveLeft, Command::MoveRight);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a shape matrix
pub const SHAPE_SIZE: usize = 4;

/// Number of shapes in the catalog
pub const SHAPE_COUNT: u8 = 7;

/// Spawn origin column
pub const SPAWN_X: i8 = 3;

/// Spawn origin row
pub const SPAWN_Y: i8 = 0;

/// Identifier of an empty grid cell
pub const EMPTY_CELL: Cell = 0;

/// Automatic descent interval in milliseconds.
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 500;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Score awarded per lock, indexed by rows cleared in that lock.
pub const LINE_SCORES: [u32; 5] = [0, 10, 30, 60, 100];

/// One grid cell: `0` = empty, `1..=7` = locked shape identifier.
pub type Cell = u8;

/// 4x4 occupancy mask of a shape, indexed `[row][col]`.
pub type ShapeMatrix = [[bool; SHAPE_SIZE]; SHAPE_SIZE];

/// Row-major grid of cell identifiers, indexed `[y][x]`.
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color for each cell identifier (index 0 is the empty cell).
pub const COLOR_LOOKUP: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 0, 0),
];

/// Shape kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All kinds in catalog order (index = id - 1)
    pub const ALL: [ShapeKind; SHAPE_COUNT as usize] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// 1-based catalog identifier, also used as the grid cell marker
    pub fn id(&self) -> Cell {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Look up a kind by its 1-based identifier
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1..=SHAPE_COUNT => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    pub fn color(&self) -> Rgb {
        COLOR_LOOKUP[self.id() as usize]
    }

    /// Upper-case letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::T => "T",
            ShapeKind::Z => "Z",
        }
    }
}

/// Discrete player commands.
///
/// The host submits one command per key press. Rejected commands are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Pause,
}
