//! Routing of input events into the session.
//!
//! Mirrors the two handlers of the browser game: a key press starts a round
//! when nothing is running, a pad press is only accepted while a round runs.

use crate::session::GameSession;
use crate::types::{InputEvent, Phase, SimonError, Symbol};

/// What the run loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Start trigger: begins a round only while idle.
pub fn on_key_press(session: &mut GameSession) -> bool {
    session.begin()
}

/// Pad press: only reaches the session while clicks are accepted.
pub fn on_button_click(session: &mut GameSession, symbol: Symbol) -> bool {
    if session.phase() != Phase::Playing {
        return false;
    }
    session.submit_input(symbol)
}

/// Apply one input event.
pub fn dispatch(session: &mut GameSession, event: InputEvent) -> Flow {
    match event {
        InputEvent::AnyKey => {
            on_key_press(session);
        }
        InputEvent::Click(symbol) => {
            on_button_click(session, symbol);
        }
        InputEvent::PadKey(symbol) => match session.phase() {
            Phase::Idle => {
                on_key_press(session);
            }
            Phase::Playing => {
                on_button_click(session, symbol);
            }
        },
        InputEvent::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Pad press by raw button id.
///
/// Ids outside the alphabet fail with [`SimonError::InvalidSymbol`] before the
/// session is touched.
pub fn click_by_id(session: &mut GameSession, id: &str) -> Result<bool, SimonError> {
    let symbol: Symbol = id.parse()?;
    Ok(on_button_click(session, symbol))
}
