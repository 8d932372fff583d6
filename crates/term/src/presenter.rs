//! TermPresenter: the terminal side of the presentation seam.
//!
//! Intents become view state: which pad is lit and for how long, whether the
//! failure flash is on, how far the play surface has slid open, and the two
//! text lines. Sounds become terminal bells, collected here and rung by the
//! run loop. All timers count down in [`TermPresenter::tick`].

use crate::core::Presenter;
use crate::types::{
    FeedbackKind, Status, Symbol, FAILURE_FLASH_MS, FEEDBACK_MS, SLIDE_MS, SYMBOL_COUNT,
};

/// A lit pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadLight {
    pub kind: FeedbackKind,
    pub remaining_ms: u32,
}

/// Everything the view needs besides the session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// `None` until the first status intent arrives.
    pub status: Option<Status>,
    pub highest_score: u32,
    pub lights: [Option<PadLight>; SYMBOL_COUNT],
    pub failure_ms: u32,
    pub container_open: bool,
    /// Slide progress toward open, `0..=SLIDE_MS`.
    pub slide_ms: u32,
}

impl ViewState {
    pub fn light(&self, symbol: Symbol) -> Option<PadLight> {
        self.lights[symbol.index()]
    }

    pub fn failure_flash(&self) -> bool {
        self.failure_ms > 0
    }

    /// Rows of a `total`-row surface that are currently uncovered.
    pub fn visible_rows(&self, total: u16) -> u16 {
        ((total as u32 * self.slide_ms) / SLIDE_MS) as u16
    }

    /// Any timer still running (the frame will change without input).
    pub fn animating(&self) -> bool {
        self.failure_ms > 0
            || self.lights.iter().any(Option::is_some)
            || (self.container_open && self.slide_ms < SLIDE_MS)
            || (!self.container_open && self.slide_ms > 0)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status: None,
            highest_score: 0,
            lights: [None; SYMBOL_COUNT],
            failure_ms: 0,
            container_open: false,
            slide_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TermPresenter {
    state: ViewState,
    bell_enabled: bool,
    pending_bells: u32,
}

impl TermPresenter {
    pub fn new(bell_enabled: bool) -> Self {
        Self {
            state: ViewState::default(),
            bell_enabled,
            pending_bells: 0,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Bells requested since the last call.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.pending_bells)
    }

    /// Count down highlight/flash timers and move the slide animation.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for light in self.state.lights.iter_mut() {
            if let Some(l) = light {
                l.remaining_ms = l.remaining_ms.saturating_sub(elapsed_ms);
                if l.remaining_ms == 0 {
                    *light = None;
                }
            }
        }

        self.state.failure_ms = self.state.failure_ms.saturating_sub(elapsed_ms);

        self.state.slide_ms = if self.state.container_open {
            (self.state.slide_ms + elapsed_ms).min(SLIDE_MS)
        } else {
            self.state.slide_ms.saturating_sub(elapsed_ms)
        };
    }

    fn sound(&mut self) {
        if self.bell_enabled {
            self.pending_bells += 1;
        }
    }
}

impl Presenter for TermPresenter {
    fn play_feedback(&mut self, symbol: Symbol, kind: FeedbackKind) {
        self.state.lights[symbol.index()] = Some(PadLight {
            kind,
            remaining_ms: FEEDBACK_MS,
        });
        self.sound();
    }

    fn play_failure_feedback(&mut self) {
        self.state.failure_ms = FAILURE_FLASH_MS;
        self.sound();
    }

    fn show_status(&mut self, status: Status) {
        self.state.status = Some(status);
    }

    fn show_highest_score(&mut self, value: u32) {
        self.state.highest_score = value;
    }

    fn show_round_container(&mut self) {
        self.state.container_open = true;
    }

    fn hide_round_container(&mut self) {
        self.state.container_open = false;
    }
}
