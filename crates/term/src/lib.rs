//! Terminal rendering for the block game.
//!
//! The view maps a [`core::GameSnapshot`] into a framebuffer of styled
//! character cells; the renderer flushes that framebuffer to a real terminal,
//! only re-emitting the cells that changed since the previous frame.
//!
//! - `fb`: framebuffer and style types
//! - `game_view`: snapshot → framebuffer (pure, unit-testable)
//! - `renderer`: framebuffer → crossterm commands

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
