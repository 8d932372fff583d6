//! Terminal presentation module.
//!
//! This is the terminal implementation of the game's presentation seam. It
//! avoids widget libraries and renders into a simple framebuffer that is then
//! flushed to a terminal backend.
//!
//! - [`presenter`]: turns session intents into timed view state and bells
//! - [`game_view`]: pure mapping from view state to a framebuffer
//! - [`renderer`]: raw-mode terminal output with diffed redraws

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use tui_simon_core as core;
pub use tui_simon_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use presenter::{PadLight, TermPresenter, ViewState};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
