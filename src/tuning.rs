//! Game balance knobs
//!
//! All numbers the engine reads live here so tests can inject a tighter
//! configuration. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Numeric tuning for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Score that completes the session
    pub target_score: u32,

    // === Spawner ===
    pub spawn_base_interval_ms: u64,
    pub spawn_decay_per_point_ms: u64,
    pub spawn_max_decay_ms: u64,
    pub spawn_min_interval_ms: u64,
    /// Horizontal position range (percent, half-open)
    pub x_range: (f32, f32),
    /// Fall duration range (seconds, half-open)
    pub fall_secs_range: (f32, f32),
    /// Glyph size range (px, half-open)
    pub size_range: (f32, f32),

    /// Timer firings replayed per `advance` before the clock resyncs
    pub max_catchup_steps: u32,

    // === Lifecycle ===
    pub sweep_interval_ms: u64,
    pub miss_threshold: f32,

    // === Combo ===
    pub combo_timeout_ms: u64,
    pub multiplier_step: f32,
    pub multiplier_cap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            target_score: TARGET_SCORE,

            spawn_base_interval_ms: SPAWN_BASE_INTERVAL_MS,
            spawn_decay_per_point_ms: SPAWN_DECAY_PER_POINT_MS,
            spawn_max_decay_ms: SPAWN_MAX_DECAY_MS,
            spawn_min_interval_ms: SPAWN_MIN_INTERVAL_MS,
            x_range: (SPAWN_X_MIN, SPAWN_X_MAX),
            fall_secs_range: (FALL_SECS_MIN, FALL_SECS_MAX),
            size_range: (SIZE_MIN, SIZE_MAX),
            max_catchup_steps: MAX_CATCHUP_STEPS,

            sweep_interval_ms: SWEEP_INTERVAL_MS,
            miss_threshold: MISS_THRESHOLD,

            combo_timeout_ms: COMBO_TIMEOUT_MS,
            multiplier_step: MULTIPLIER_STEP,
            multiplier_cap: MULTIPLIER_CAP,
        }
    }
}

impl Tuning {
    /// Default tuning with a different goal
    pub fn with_target(target_score: u32) -> Self {
        Self {
            target_score: target_score.max(1),
            ..Self::default()
        }
    }

    /// Spawn interval for the given score.
    ///
    /// `base - min(score * decay, max_decay)`, never below the floor.
    pub fn spawn_interval_ms(&self, score: u32) -> u64 {
        let decay = (score as u64)
            .saturating_mul(self.spawn_decay_per_point_ms)
            .min(self.spawn_max_decay_ms);
        self.spawn_base_interval_ms
            .saturating_sub(decay)
            .max(self.spawn_min_interval_ms)
            .max(1)
    }

    /// Multiplier earned by a streak of the given length
    pub fn multiplier_for_streak(&self, streak: u32) -> f32 {
        let steps = (streak / 2) as f32;
        (1.0 + steps * self.multiplier_step).clamp(1.0, self.multiplier_cap.max(1.0))
    }
}
