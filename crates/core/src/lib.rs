//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid, the shape catalog, collision checks, line
//! clearing, scoring and the session controller. It has **no dependencies** on
//! rendering, input polling or I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same shape sequence
//! - **Testable**: a session is driven by explicit commands and timestamps
//! - **Portable**: any host loop (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and line clearing
//! - [`game_state`]: session controller: active piece, drop timer, locking, game over
//! - [`shapes`]: the 7-shape catalog and 4x4 matrix rotation
//! - [`rng`]: seeded uniform shape source with one-piece lookahead
//! - [`scoring`]: fixed line-clear score table
//! - [`snapshot`]: read-only state handed to renderers
//! - [`config`]: per-session parameters
//!
//! # Game Rules
//!
//! - Shapes are drawn uniformly at random and spawn at (3, 0)
//! - Moves and rotations that do not fit are ignored; rotation never kicks
//! - The piece descends one row whenever strictly more than the drop interval
//!   (500ms by default) has elapsed; if it cannot, it locks
//! - Each lock scores 10/30/60/100 for 1/2/3/4 cleared rows
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameConfig, GameState};
//! use tui_blocks_types::Command;
//!
//! let mut game = GameState::new(GameConfig::new(12345));
//!
//! // One host frame: commands first, then the drop timer.
//! let snap = game.step([Command::MoveRight, Command::Rotate], 0);
//! assert!(!snap.game_over);
//!
//! game.apply_command(Command::HardDrop);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use config::GameConfig;
pub use game_state::{GamePhase, GameState, LockEvent, Piece};
pub use rng::{ShapeQueue, SimpleRng};
pub use scoring::line_clear_score;
pub use shapes::{get_shape, occupied_cells, random_shape, rotate_shape, Shape, SHAPES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
