//! Heart spawner
//!
//! Emits at most one heart per tick. The interval is recomputed from the
//! score every time a heart is spawned, so play speeds up as points come in.

use rand::Rng;

use super::state::{FallingObject, spawn_object};
use super::timer::Timer;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Spawner {
    timer: Timer,
    next_id: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            timer: Timer::idle(),
            next_id: 0,
        }
    }

    /// Schedule the first spawn one interval after `now_ms`
    pub fn start(&mut self, now_ms: u64, score: u32, tuning: &Tuning) {
        self.timer.arm(now_ms, tuning.spawn_interval_ms(score));
    }

    pub fn stop(&mut self) {
        self.timer.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    /// When the next heart is due, if the spawner is running
    pub fn due_at(&self) -> Option<u64> {
        self.timer.due_at()
    }

    /// Allocate a new object ID
    pub fn next_object_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a heart if one is due by `now_ms`.
    ///
    /// The heart is stamped with its due time, not `now_ms`, so late polls
    /// still place it where it would have been.
    pub fn tick<R: Rng>(
        &mut self,
        now_ms: u64,
        score: u32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<FallingObject> {
        let due = self.timer.fire(now_ms)?;
        let id = self.next_object_id();
        let object = spawn_object(rng, id, due, tuning);
        self.timer.arm(due, tuning.spawn_interval_ms(score));
        Some(object)
    }
}
