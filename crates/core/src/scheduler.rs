//! Deferred one-shot continuations on a fixed-timestep clock.
//!
//! Timers cannot be cancelled. A task scheduled with `schedule` will be handed
//! back by `pop_due` once the clock has advanced past its due time, whatever
//! happened to the session in between.

#[derive(Debug, Clone)]
struct Timer<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Queue of pending deferred tasks.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Timer<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `task` to become due `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, task: T) {
        let timer = Timer {
            due_ms: self.now_ms + delay_ms as u64,
            seq: self.next_seq,
            task,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending.push(timer);
    }

    /// Move the clock forward.
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
    }

    /// Remove and return the earliest due task.
    ///
    /// Ties on due time resolve in scheduling order.
    pub fn pop_due(&mut self) -> Option<T> {
        let now = self.now_ms;
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(idx).task)
    }

    /// Number of tasks not yet handed out.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Milliseconds until the next task is due, if any is pending.
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|t| t.due_ms.saturating_sub(self.now_ms))
            .min()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
