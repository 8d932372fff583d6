use crate::types::Phase;

/// Copyable summary of a session, for views and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub level: u32,
    pub score: u32,
    pub highest_score: u32,
    pub pattern_len: u32,
    pub input_len: u32,
    pub pending_deferred: u32,
}

impl SessionSnapshot {
    /// Whether pad presses are currently accepted.
    pub fn accepts_clicks(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Steps of the current pattern the player still has to enter.
    pub fn remaining(&self) -> u32 {
        self.pattern_len.saturating_sub(self.input_len)
    }
}
