//! Game session - the Simon state machine
//!
//! The session owns the target pattern, the player's input for the current
//! level and the level/score counters. It never renders: every visible or
//! audible effect is queued as an [`Intent`] and handed to a presenter by the
//! caller (see [`GameSession::flush_to`]).
//!
//! Two steps are deferred on the session clock (advanced by
//! [`GameSession::tick`]):
//!
//! - **Reveal**: the first symbol appears `REVEAL_DELAY_MS` after `begin`.
//! - **Advance**: the next level starts `ADVANCE_DELAY_MS` after the player
//!   matched the whole pattern.
//!
//! Deferred steps are fire-and-forget. They run even if the round ended while
//! they were pending, exactly like the timers they model.

use crate::presenter::Presenter;
use crate::rng::SymbolSource;
use crate::scheduler::Scheduler;
use crate::snapshot::SessionSnapshot;
use crate::types::*;

/// Continuations queued on the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Append and flash the first symbol of a round.
    Reveal,
    /// Count the cleared level, then append and flash the next symbol.
    Advance,
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    pattern: Vec<Symbol>,
    user_input: Vec<Symbol>,
    level: u32,
    score: u32,
    highest_score: u32,
    symbols: SymbolSource,
    scheduler: Scheduler<Deferred>,
    intents: Vec<Intent>,
}

impl GameSession {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: Phase::Idle,
            pattern: Vec::new(),
            user_input: Vec::new(),
            level: 0,
            score: 0,
            highest_score: 0,
            symbols: SymbolSource::new(seed),
            scheduler: Scheduler::new(),
            intents: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub fn pattern(&self) -> &[Symbol] {
        &self.pattern
    }

    pub fn user_input(&self) -> &[Symbol] {
        &self.user_input
    }

    pub fn seed(&self) -> u32 {
        self.symbols.seed()
    }

    /// Deferred steps that have not run yet.
    pub fn pending_deferred(&self) -> usize {
        self.scheduler.pending()
    }

    /// Milliseconds until the earliest pending deferred step runs.
    pub fn next_deferred_in(&self) -> Option<u64> {
        self.scheduler.next_due_in()
    }

    /// Intents emitted so far and not yet taken.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Take all queued intents, oldest first.
    pub fn take_intents(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    /// Hand all queued intents to `presenter`, oldest first.
    pub fn flush_to<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for intent in self.intents.drain(..) {
            presenter.present(&intent);
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            level: self.level,
            score: self.score,
            highest_score: self.highest_score,
            pattern_len: self.pattern.len() as u32,
            input_len: self.user_input.len() as u32,
            pending_deferred: self.scheduler.pending() as u32,
        }
    }

    /// Start a round.
    ///
    /// Returns `false` (and changes nothing) while a round is already running.
    pub fn begin(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }

        self.phase = Phase::Playing;
        // A stale step that already ran may have touched these. One still
        // pending runs against the new round.
        self.pattern.clear();
        self.user_input.clear();
        self.level = 0;
        self.score = 0;

        self.intents.push(Intent::ShowRoundContainer);
        self.scheduler.schedule(REVEAL_DELAY_MS, Deferred::Reveal);
        true
    }

    /// Draw a fresh random symbol.
    pub fn generate_symbol(&mut self) -> Symbol {
        self.symbols.generate_symbol()
    }

    /// Record a pad press.
    ///
    /// Ignored while idle (returns `false`). Otherwise the press is echoed,
    /// appended and checked against the pattern: a mismatch ends the game, a
    /// complete match schedules the next level.
    pub fn submit_input(&mut self, symbol: Symbol) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.intents.push(Intent::PlayFeedback {
            symbol,
            kind: FeedbackKind::Press,
        });
        self.user_input.push(symbol);

        if !self.input_matches() {
            self.end_game();
            return true;
        }

        if self.user_input.len() == self.pattern.len() {
            self.scheduler.schedule(ADVANCE_DELAY_MS, Deferred::Advance);
        }
        true
    }

    /// Every entered symbol has a counterpart in the pattern and equals it.
    ///
    /// Input beyond the end of the pattern (during the reveal window, or after
    /// the level was already matched) counts as a mismatch.
    fn input_matches(&self) -> bool {
        self.user_input
            .iter()
            .enumerate()
            .all(|(i, s)| self.pattern.get(i) == Some(s))
    }

    /// End the current round.
    ///
    /// The game-over status carries the score of the round that just ended;
    /// counters are reset only after it has been captured.
    pub fn end_game(&mut self) {
        let final_score = self.score;

        self.phase = Phase::Idle;
        self.pattern.clear();
        self.user_input.clear();

        self.intents.push(Intent::PlayFailureFeedback);
        self.intents.push(Intent::HideRoundContainer);
        self.intents.push(Intent::ShowStatus(Status::GameOver { score: final_score }));

        if final_score > self.highest_score {
            self.highest_score = final_score;
        }
        self.score = 0;
        self.level = 0;

        self.intents.push(Intent::ShowHighestScore(self.highest_score));
    }

    /// Advance the session clock and run every deferred step that became due.
    ///
    /// Returns the number of deferred steps that ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> usize {
        self.scheduler.advance(elapsed_ms);

        let mut ran = 0;
        while let Some(step) = self.scheduler.pop_due() {
            match step {
                Deferred::Reveal => self.level_up(),
                Deferred::Advance => {
                    self.score += 1;
                    self.level_up();
                }
            }
            ran += 1;
        }
        ran
    }

    fn level_up(&mut self) {
        self.user_input.clear();
        self.level += 1;

        let symbol = self.generate_symbol();
        self.pattern.push(symbol);

        self.intents.push(Intent::PlayFeedback {
            symbol,
            kind: FeedbackKind::Reveal,
        });
        self.intents.push(Intent::ShowStatus(Status::Level(self.level)));
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
