//! IntentLog: a presenter that appends every intent to a JSON-lines sink.
//!
//! Write failures disable the log and are reported once on stderr; the game
//! keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Presenter;
use crate::protocol::{IntentRecord, IntentWire};
use crate::types::{FeedbackKind, Intent, Status, Symbol};

pub struct IntentLog<W: Write> {
    out: Option<W>,
    seq: u64,
    clock_ms: u64,
}

impl IntentLog<BufWriter<File>> {
    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open intent log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> IntentLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            clock_ms: 0,
        }
    }

    /// Advance the timestamp used for subsequent records.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms += elapsed_ms as u64;
    }

    /// Records written so far.
    pub fn written(&self) -> u64 {
        self.seq
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Give back the sink (flushed), if the log is still enabled.
    pub fn into_inner(mut self) -> Option<W> {
        let mut out = self.out.take()?;
        out.flush().ok()?;
        Some(out)
    }

    fn record(&mut self, intent: Intent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        let rec = IntentRecord {
            seq: self.seq + 1,
            at_ms: self.clock_ms,
            intent: IntentWire::from(&intent),
        };
        let res = serde_json::to_writer(&mut *out, &rec)
            .map_err(anyhow::Error::from)
            .and_then(|_| out.write_all(b"\n").map_err(anyhow::Error::from))
            .and_then(|_| out.flush().map_err(anyhow::Error::from));

        match res {
            Ok(()) => self.seq += 1,
            Err(e) => {
                eprintln!("[IntentLog] write failed, logging disabled: {}", e);
                self.out = None;
            }
        }
    }
}

impl<W: Write> Presenter for IntentLog<W> {
    fn play_feedback(&mut self, symbol: Symbol, kind: FeedbackKind) {
        self.record(Intent::PlayFeedback { symbol, kind });
    }

    fn play_failure_feedback(&mut self) {
        self.record(Intent::PlayFailureFeedback);
    }

    fn show_status(&mut self, status: Status) {
        self.record(Intent::ShowStatus(status));
    }

    fn show_highest_score(&mut self, value: u32) {
        self.record(Intent::ShowHighestScore(value));
    }

    fn show_round_container(&mut self) {
        self.record(Intent::ShowRoundContainer);
    }

    fn hide_round_container(&mut self) {
        self.record(Intent::HideRoundContainer);
    }
}
