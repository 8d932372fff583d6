//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`]. The module is
//! independent of any UI framework; the run loop decides which key event
//! kinds (press/repeat/release) reach it.

pub mod map;

pub use tui_simon_types as types;

pub use map::{map_key, pad_key, should_quit};
