//! TUI Simon (workspace facade crate).
//!
//! Exposes the game as `tui_simon::{core, adapter, term, input, types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_simon_adapter as adapter;
pub use tui_simon_core as core;
pub use tui_simon_input as input;
pub use tui_simon_term as term;
pub use tui_simon_types as types;
