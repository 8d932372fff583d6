//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, usable from the session logic, the terminal
//! presenter and the intent log alike.
//!
//! # Alphabet
//!
//! The game uses a fixed alphabet of four pads, in this order:
//!
//! | Index | Symbol | Id |
//! |-------|--------|----|
//! | 0 | Yellow | `yellow` |
//! | 1 | Blue | `blue` |
//! | 2 | Red | `red` |
//! | 3 | Green | `green` |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the run loop |
//! | `REVEAL_DELAY_MS` | 600 | Delay between a start key and the first flash |
//! | `ADVANCE_DELAY_MS` | 1000 | Delay between a cleared level and the next flash |
//! | `FEEDBACK_MS` | 300 | Pad highlight duration |
//! | `FAILURE_FLASH_MS` | 300 | Full-screen failure flash duration |
//! | `SLIDE_MS` | 300 | Play surface reveal/conceal animation |
//!
//! # Examples
//!
//! ```
//! use tui_simon_types::{Status, Symbol, SYMBOL_COUNT};
//!
//! let parsed: Symbol = "Red".parse().unwrap();
//! assert_eq!(parsed, Symbol::Red);
//! assert_eq!(parsed.index(), 2);
//! assert!("purple".parse::<Symbol>().is_err());
//!
//! assert_eq!(Symbol::ALL.len(), SYMBOL_COUNT);
//! assert_eq!(Status::Level(3).to_string(), "Level: 3");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of symbols in the alphabet.
pub const SYMBOL_COUNT: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the start trigger and the first revealed symbol.
pub const REVEAL_DELAY_MS: u32 = 600;

/// Delay between a fully matched pattern and the next revealed symbol.
///
/// Lets the player's own press feedback finish before the next flash starts.
pub const ADVANCE_DELAY_MS: u32 = 1000;

/// Pad highlight duration for both reveals and presses.
pub const FEEDBACK_MS: u32 = 300;

/// Failure flash duration.
pub const FAILURE_FLASH_MS: u32 = 300;

/// Play surface slide duration (both directions).
pub const SLIDE_MS: u32 = 300;

/// Errors surfaced to callers of the game API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimonError {
    /// A button id or index outside the four-symbol alphabet.
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

/// One of the four pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Yellow,
    Blue,
    Red,
    Green,
}

impl Symbol {
    /// All symbols, in alphabet order.
    pub const ALL: [Symbol; SYMBOL_COUNT] =
        [Symbol::Yellow, Symbol::Blue, Symbol::Red, Symbol::Green];

    /// Position in the alphabet (0..4).
    pub fn index(&self) -> usize {
        match self {
            Symbol::Yellow => 0,
            Symbol::Blue => 1,
            Symbol::Red => 2,
            Symbol::Green => 3,
        }
    }

    /// Lowercase button id.
    ///
    /// ```
    /// use tui_simon_types::Symbol;
    ///
    /// assert_eq!(Symbol::Yellow.as_str(), "yellow");
    /// assert_eq!(Symbol::Green.as_str(), "green");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Yellow => "yellow",
            Symbol::Blue => "blue",
            Symbol::Red => "red",
            Symbol::Green => "green",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = SimonError;

    /// Parse a button id (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Ok(Symbol::Yellow),
            "blue" => Ok(Symbol::Blue),
            "red" => Ok(Symbol::Red),
            "green" => Ok(Symbol::Green),
            _ => Err(SimonError::InvalidSymbol(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = SimonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| SimonError::InvalidSymbol(value.to_string()))
    }
}

/// Session phase.
///
/// - **Idle**: before the first round or after a game over; only a start
///   trigger has an effect.
/// - **Playing**: pad presses are accepted; start triggers are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
}

/// Which kind of flash a feedback intent asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    /// The game reveals a newly appended symbol.
    Reveal,
    /// Echo of a player's press (right or wrong).
    Press,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Reveal => "reveal",
            FeedbackKind::Press => "press",
        }
    }
}

/// Text shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Current level while a round is running.
    Level(u32),
    /// Final score of the round that just ended.
    GameOver { score: u32 },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Level(level) => write!(f, "Level: {}", level),
            Status::GameOver { score } => write!(
                f,
                "Game Over! Your score was {}. Press any key to start.",
                score
            ),
        }
    }
}

/// Presentation intent emitted by the game session.
///
/// Intents are consumed in order by a presenter; the session never renders
/// anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Flash and sound a pad.
    PlayFeedback { symbol: Symbol, kind: FeedbackKind },
    /// Error sound plus full-screen failure flash.
    PlayFailureFeedback,
    /// Replace the status line.
    ShowStatus(Status),
    /// Replace the best-score line.
    ShowHighestScore(u32),
    /// Animate the play surface in.
    ShowRoundContainer,
    /// Animate the play surface out.
    HideRoundContainer,
}

/// Input events delivered to the session by the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Any key that is not bound to a pad.
    AnyKey,
    /// A direct press of a pad.
    Click(Symbol),
    /// A key bound to a pad: starts the game while idle, presses the pad while playing.
    PadKey(Symbol),
    /// Leave the game.
    Quit,
}
