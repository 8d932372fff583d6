//! Wire format of the intent log.
//!
//! One [`IntentRecord`] per line, JSON encoded:
//!
//! ```text
//! {"seq":1,"at_ms":0,"intent":{"type":"show_round_container"}}
//! {"seq":2,"at_ms":608,"intent":{"type":"play_feedback","symbol":"red","kind":"reveal"}}
//! {"seq":3,"at_ms":608,"intent":{"type":"show_status","status":{"level":1},"text":"Level: 1"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{FeedbackKind, Intent, Status, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolLower {
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "green")]
    Green,
}

impl From<Symbol> for SymbolLower {
    fn from(value: Symbol) -> Self {
        match value {
            Symbol::Yellow => Self::Yellow,
            Symbol::Blue => Self::Blue,
            Symbol::Red => Self::Red,
            Symbol::Green => Self::Green,
        }
    }
}

impl From<SymbolLower> for Symbol {
    fn from(value: SymbolLower) -> Self {
        match value {
            SymbolLower::Yellow => Symbol::Yellow,
            SymbolLower::Blue => Symbol::Blue,
            SymbolLower::Red => Symbol::Red,
            SymbolLower::Green => Symbol::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKindLower {
    Reveal,
    Press,
}

impl From<FeedbackKind> for FeedbackKindLower {
    fn from(value: FeedbackKind) -> Self {
        match value {
            FeedbackKind::Reveal => Self::Reveal,
            FeedbackKind::Press => Self::Press,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusWire {
    Level(u32),
    GameOver { score: u32 },
}

impl From<Status> for StatusWire {
    fn from(value: Status) -> Self {
        match value {
            Status::Level(level) => Self::Level(level),
            Status::GameOver { score } => Self::GameOver { score },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntentWire {
    PlayFeedback {
        symbol: SymbolLower,
        kind: FeedbackKindLower,
    },
    PlayFailureFeedback,
    ShowStatus {
        status: StatusWire,
        /// Rendered status line, as a presenter would show it.
        text: String,
    },
    ShowHighestScore {
        value: u32,
    },
    ShowRoundContainer,
    HideRoundContainer,
}

impl From<&Intent> for IntentWire {
    fn from(value: &Intent) -> Self {
        match *value {
            Intent::PlayFeedback { symbol, kind } => Self::PlayFeedback {
                symbol: symbol.into(),
                kind: kind.into(),
            },
            Intent::PlayFailureFeedback => Self::PlayFailureFeedback,
            Intent::ShowStatus(status) => Self::ShowStatus {
                status: status.into(),
                text: status.to_string(),
            },
            Intent::ShowHighestScore(value) => Self::ShowHighestScore { value },
            Intent::ShowRoundContainer => Self::ShowRoundContainer,
            Intent::HideRoundContainer => Self::HideRoundContainer,
        }
    }
}

/// One logged intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// 1-based position in the log.
    pub seq: u64,
    /// Log clock when the intent was presented.
    pub at_ms: u64,
    pub intent: IntentWire,
}
