//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values plus the
//! host-level actions (quit, restart) that the simulation does not know about.
//! One command is produced per key press; held keys are not repeated here.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, map_key, should_quit, KeyAction};
