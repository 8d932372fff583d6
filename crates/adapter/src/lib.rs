//! Adapter module - run configuration and the intent log
//!
//! Besides the terminal, the game can hand its presentation intents to an
//! auditing presenter that writes them to a file, one JSON object per line.
//! This makes a play session replayable and diffable without a terminal.
//!
//! # Environment Variables
//!
//! - `SIMON_SEED`: RNG seed (default: random)
//! - `SIMON_LOG_PATH`: intent log path (default: no log)
//! - `SIMON_BELL`: set to "0" or "false" to silence the bell
//!
//! # Example Log
//!
//! ```text
//! {"seq":1,"at_ms":16,"intent":{"type":"show_round_container"}}
//! {"seq":2,"at_ms":624,"intent":{"type":"play_feedback","symbol":"green","kind":"reveal"}}
//! {"seq":3,"at_ms":624,"intent":{"type":"show_status","status":{"level":1},"text":"Level: 1"}}
//! ```
//!
//! # Implementation
//!
//! - See [`protocol`] for the record structure
//! - See [`intent_log`] for the writer
//! - See [`tee`] for presenting to the terminal and the log at once

pub mod config;
pub mod intent_log;
pub mod protocol;
pub mod tee;

pub use tui_simon_core as core;
pub use tui_simon_types as types;

pub use config::RunConfig;
pub use intent_log::IntentLog;
pub use protocol::*;
pub use tee::Tee;
