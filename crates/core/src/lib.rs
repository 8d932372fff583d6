//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Simon rules and nothing else. It has **no
//! dependencies** on terminals, files or clocks, which makes it:
//!
//! - **Deterministic**: the same seed and the same inputs produce the same game
//! - **Testable**: time only moves when [`GameSession::tick`] is called
//! - **Portable**: any presenter (terminal, log, headless) can drive it
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG and uniform symbol generation
//! - [`scheduler`]: non-cancellable deferred continuations on a millisecond clock
//! - [`session`]: the game state machine (pattern, input, level, score)
//! - [`dispatch`]: key-press / pad-press routing into the session
//! - [`presenter`]: the presentation capability trait consumed by adapters
//! - [`snapshot`]: copyable session summary for views
//!
//! # Example
//!
//! ```
//! use tui_simon_core::GameSession;
//! use tui_simon_types::{Phase, REVEAL_DELAY_MS, ADVANCE_DELAY_MS};
//!
//! let mut game = GameSession::new(12345);
//! game.begin();
//! game.tick(REVEAL_DELAY_MS);
//! assert_eq!(game.level(), 1);
//!
//! // Repeat the pattern back.
//! let first = game.pattern()[0];
//! game.submit_input(first);
//! game.tick(ADVANCE_DELAY_MS);
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.level(), 2);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod dispatch;
pub mod presenter;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use tui_simon_types as types;

pub use dispatch::{click_by_id, dispatch, on_button_click, on_key_press, Flow};
pub use presenter::{Presenter, RecordingPresenter};
pub use rng::{SimpleRng, SymbolSource};
pub use scheduler::Scheduler;
pub use session::{Deferred, GameSession};
pub use snapshot::SessionSnapshot;
