//! Combo and scoring
//!
//! Catches landing within the combo timeout of the previous catch extend the
//! streak. The multiplier grows by one step for every two streak catches and
//! is capped. A miss kills the combo outright; silence past the timeout lets
//! it decay.

use serde::{Deserialize, Serialize};

use super::timer::Timer;
use crate::tuning::Tuning;

/// Streak bookkeeping exposed to the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboState {
    pub streak: u32,
    pub multiplier: f32,
    /// Sim time of the most recent catch
    pub last_catch_ms: Option<u64>,
}

impl Default for ComboState {
    fn default() -> Self {
        Self {
            streak: 0,
            multiplier: 1.0,
            last_catch_ms: None,
        }
    }
}

/// Scores catches and owns the combo-decay timer
#[derive(Debug, Clone)]
pub struct ComboEngine {
    state: ComboState,
    decay: Timer,
    tuning: Tuning,
}

impl ComboEngine {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            state: ComboState::default(),
            decay: Timer::idle(),
            tuning: tuning.clone(),
        }
    }

    pub fn state(&self) -> ComboState {
        self.state
    }

    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    pub fn multiplier(&self) -> f32 {
        self.state.multiplier
    }

    /// When the combo will decay if no catch intervenes
    pub fn decay_due_at(&self) -> Option<u64> {
        self.decay.due_at()
    }

    /// Score a catch at `now_ms`. Always awards at least one point.
    pub fn on_catch(&mut self, now_ms: u64) -> u32 {
        let chained = self
            .state
            .last_catch_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.tuning.combo_timeout_ms);

        if chained && self.state.streak > 0 {
            self.state.streak += 1;
            self.state.multiplier = self.tuning.multiplier_for_streak(self.state.streak);
        } else {
            self.state.streak = 1;
            self.state.multiplier = 1.0;
        }

        self.state.last_catch_ms = Some(now_ms);
        self.decay.arm(now_ms, self.tuning.combo_timeout_ms);

        (self.state.multiplier.round() as u32).max(1)
    }

    /// A heart escaped: drop straight back to no combo
    pub fn on_miss(&mut self) {
        self.decay.cancel();
        self.reset();
    }

    /// The decay timer ran out without another catch
    pub fn on_combo_timeout(&mut self) {
        self.decay.cancel();
        self.reset();
    }

    /// Fire the decay timer if it is due by `now_ms`. Returns the streak that expired.
    pub fn poll_decay(&mut self, now_ms: u64) -> Option<u32> {
        self.decay.fire(now_ms)?;
        let expired = self.state.streak;
        self.on_combo_timeout();
        Some(expired)
    }

    /// Disarm the decay timer without touching the streak
    pub fn cancel_decay(&mut self) {
        self.decay.cancel();
    }

    fn reset(&mut self) {
        self.state.streak = 0;
        self.state.multiplier = 1.0;
    }
}
