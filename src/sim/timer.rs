//! Cancellable timers on the simulation clock
//!
//! A timer is a single pending deadline. Repeating activities re-arm from
//! the deadline that just fired so cadence does not drift with poll timing.
//! Timers are plain fields of their owner: dropping the owner drops them, so
//! nothing can fire into a discarded session.

/// One pending deadline in sim milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    due_ms: Option<u64>,
}

impl Timer {
    /// A timer with nothing scheduled
    pub fn idle() -> Self {
        Self { due_ms: None }
    }

    /// (Re)schedule to fire `delay_ms` after `from_ms`, replacing any pending deadline
    pub fn arm(&mut self, from_ms: u64, delay_ms: u64) {
        self.due_ms = Some(from_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_at(&self) -> Option<u64> {
        self.due_ms
    }

    /// Deadline if it falls at or before `now_ms`
    pub fn due_by(&self, now_ms: u64) -> Option<u64> {
        self.due_ms.filter(|&due| due <= now_ms)
    }

    /// Consume the deadline if it has passed. Returns when it was due.
    pub fn fire(&mut self, now_ms: u64) -> Option<u64> {
        let due = self.due_by(now_ms)?;
        self.due_ms = None;
        Some(due)
    }
}
