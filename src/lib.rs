//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blocks::{core,input,term,types}` and
//! hosts the command-line configuration used by the terminal binary.

pub mod cli;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
