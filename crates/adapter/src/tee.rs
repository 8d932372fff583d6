use crate::core::Presenter;
use crate::types::{FeedbackKind, Status, Symbol};

/// Presents every intent to two presenters, `first` then `second`.
pub struct Tee<'a, A: ?Sized, B: ?Sized> {
    pub first: &'a mut A,
    pub second: &'a mut B,
}

impl<'a, A: Presenter + ?Sized, B: Presenter + ?Sized> Tee<'a, A, B> {
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<A: Presenter + ?Sized, B: Presenter + ?Sized> Presenter for Tee<'_, A, B> {
    fn play_feedback(&mut self, symbol: Symbol, kind: FeedbackKind) {
        self.first.play_feedback(symbol, kind);
        self.second.play_feedback(symbol, kind);
    }

    fn play_failure_feedback(&mut self) {
        self.first.play_failure_feedback();
        self.second.play_failure_feedback();
    }

    fn show_status(&mut self, status: Status) {
        self.first.show_status(status);
        self.second.show_status(status);
    }

    fn show_highest_score(&mut self, value: u32) {
        self.first.show_highest_score(value);
        self.second.show_highest_score(value);
    }

    fn show_round_container(&mut self) {
        self.first.show_round_container();
        self.second.show_round_container();
    }

    fn hide_round_container(&mut self) {
        self.first.hide_round_container();
        self.second.hide_round_container();
    }
}
