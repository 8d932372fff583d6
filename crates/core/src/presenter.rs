//! Presenter seam between the session and whatever renders it.
//!
//! A presenter turns intents into pixels, glyphs or sound. Its methods return
//! nothing: a missing sound device or a broken pipe is the presenter's problem
//! and never reaches the session.

use crate::types::{FeedbackKind, Intent, Status, Symbol};

pub trait Presenter {
    /// Highlight `symbol` and play its sound; the highlight reverts on its own.
    fn play_feedback(&mut self, symbol: Symbol, kind: FeedbackKind);

    /// Error sound plus full-screen failure flash; reverts on its own.
    fn play_failure_feedback(&mut self);

    fn show_status(&mut self, status: Status);

    fn show_highest_score(&mut self, value: u32);

    fn show_round_container(&mut self);

    fn hide_round_container(&mut self);

    /// Route one intent to the matching capability.
    fn present(&mut self, intent: &Intent) {
        match *intent {
            Intent::PlayFeedback { symbol, kind } => self.play_feedback(symbol, kind),
            Intent::PlayFailureFeedback => self.play_failure_feedback(),
            Intent::ShowStatus(status) => self.show_status(status),
            Intent::ShowHighestScore(value) => self.show_highest_score(value),
            Intent::ShowRoundContainer => self.show_round_container(),
            Intent::HideRoundContainer => self.hide_round_container(),
        }
    }
}

/// Presenter that just remembers what it was asked to do.
///
/// Handy for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPresenter {
    pub intents: Vec<Intent>,
}

impl Presenter for RecordingPresenter {
    fn play_feedback(&mut self, symbol: Symbol, kind: FeedbackKind) {
        self.intents.push(Intent::PlayFeedback { symbol, kind });
    }

    fn play_failure_feedback(&mut self) {
        self.intents.push(Intent::PlayFailureFeedback);
    }

    fn show_status(&mut self, status: Status) {
        self.intents.push(Intent::ShowStatus(status));
    }

    fn show_highest_score(&mut self, value: u32) {
        self.intents.push(Intent::ShowHighestScore(value));
    }

    fn show_round_container(&mut self) {
        self.intents.push(Intent::ShowRoundContainer);
    }

    fn hide_round_container(&mut self) {
        self.intents.push(Intent::HideRoundContainer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_routes_every_intent_to_its_capability() {
        let all = [
            Intent::PlayFeedback {
                symbol: Symbol::Red,
                kind: FeedbackKind::Press,
            },
            Intent::PlayFailureFeedback,
            Intent::ShowStatus(Status::Level(2)),
            Intent::ShowHighestScore(5),
            Intent::ShowRoundContainer,
            Intent::HideRoundContainer,
        ];

        let mut rec = RecordingPresenter::default();
        for intent in &all {
            rec.present(intent);
        }
        assert_eq!(rec.intents, all.to_vec());
    }
}
