//! Game state and core simulation types
//!
//! Everything the render layer needs to draw a session lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::OBJECT_KINDS;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Hearts falling, input accepted
    Active,
    /// Target reached; the session is frozen
    Complete,
}

/// A heart falling through the play area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    /// Unique per session, never reused
    pub id: u32,
    /// Horizontal position, percent of play-area width
    pub x: f32,
    /// Seconds to cross the play area
    pub fall_secs: f32,
    /// Glyph size (cosmetic)
    pub size: f32,
    /// Glyph index (cosmetic)
    pub kind: u8,
    /// Sim time at spawn
    pub spawned_at_ms: u64,
}

impl FallingObject {
    /// Fraction of the play area crossed at `now_ms` (0 at spawn, 1 at the bottom edge)
    pub fn fall_progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms) as f32;
        let duration = (self.fall_secs * 1000.0).max(1.0);
        elapsed / duration
    }

    /// Whether the heart has left the play area by `now_ms`
    pub fn has_crossed(&self, now_ms: u64, threshold: f32) -> bool {
        self.fall_progress(now_ms) >= threshold
    }
}

/// Build a heart from the RNG. Attributes are drawn independently and
/// uniformly from the tuning ranges; nothing depends on score.
pub fn spawn_object<R: Rng>(
    rng: &mut R,
    id: u32,
    now_ms: u64,
    tuning: &Tuning,
) -> FallingObject {
    FallingObject {
        id,
        x: sample(rng, tuning.x_range),
        fall_secs: sample(rng, tuning.fall_secs_range),
        size: sample(rng, tuning.size_range),
        kind: rng.random_range(0..OBJECT_KINDS),
        spawned_at_ms: now_ms,
    }
}

/// Uniform draw from a half-open range, collapsing degenerate ranges to their start
fn sample<R: Rng>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Score bookkeeping for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Points earned so far (never decreases)
    pub score: u32,
    /// Goal, fixed for the session's lifetime
    pub target_score: u32,
    /// Hearts caught
    pub catches: u32,
    /// Hearts lost off the bottom
    pub misses: u32,
    pub phase: SessionPhase,
}

impl SessionState {
    pub fn new(target_score: u32) -> Self {
        Self {
            score: 0,
            target_score: target_score.max(1),
            catches: 0,
            misses: 0,
            phase: SessionPhase::Active,
        }
    }

    /// HUD progress bar fill, 0.0..=1.0
    pub fn progress(&self) -> f32 {
        (self.score as f32 / self.target_score as f32).min(1.0)
    }

    pub fn target_reached(&self) -> bool {
        self.score >= self.target_score
    }
}

/// RNG state wrapper for reproducible sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_object_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = RngState::new(7).to_rng();
        for id in 0..200 {
            let obj = spawn_object(&mut rng, id, 1000, &tuning);
            assert_eq!(obj.id, id);
            assert!(obj.x >= tuning.x_range.0 && obj.x < tuning.x_range.1);
            assert!(
                obj.fall_secs >= tuning.fall_secs_range.0
                    && obj.fall_secs < tuning.fall_secs_range.1
            );
            assert!(obj.size >= tuning.size_range.0 && obj.size < tuning.size_range.1);
            assert!(obj.kind < OBJECT_KINDS);
        }
    }

    #[test]
    fn test_spawn_object_is_deterministic() {
        let tuning = Tuning::default();
        let mut a = RngState::new(42).to_rng();
        let mut b = RngState::new(42).to_rng();
        for id in 0..10 {
            assert_eq!(
                spawn_object(&mut a, id, 0, &tuning),
                spawn_object(&mut b, id, 0, &tuning)
            );
        }
    }

    #[test]
    fn test_degenerate_range_collapses() {
        let tuning = Tuning {
            fall_secs_range: (4.0, 4.0),
            ..Tuning::default()
        };
        let mut rng = RngState::new(1).to_rng();
        assert_eq!(spawn_object(&mut rng, 0, 0, &tuning).fall_secs, 4.0);
    }

    #[test]
    fn test_fall_progress() {
        let obj = FallingObject {
            id: 0,
            x: 50.0,
            fall_secs: 4.0,
            size: 40.0,
            kind: 0,
            spawned_at_ms: 1000,
        };
        assert_eq!(obj.fall_progress(500), 0.0);
        assert_eq!(obj.fall_progress(3000), 0.5);
        assert!(!obj.has_crossed(4999, 1.0));
        assert!(obj.has_crossed(5000, 1.0));
    }

    #[test]
    fn test_progress_caps_at_one() {
        let mut state = SessionState::new(15);
        state.score = 30;
        assert_eq!(state.progress(), 1.0);
        assert!(state.target_reached());
    }
}
