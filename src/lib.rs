//! Catch My Love - a Valentine's greeting with a falling-hearts mini-game
//!
//! Core modules:
//! - `sim`: Deterministic mini-game engine (spawner, lifecycle, combo, session)
//! - `flow`: Screen state machine sequencing the whole experience
//! - `content`: Read-only message tables and `{{name}}` substitution
//! - `name`: Decoding of the recipient's name from a shared code
//! - `tuning`: Data-driven game balance
//! - `view`: Read-only view models for the render layer

pub mod content;
pub mod error;
pub mod flow;
pub mod name;
pub mod sim;
pub mod tuning;
pub mod view;

pub use content::{ContentKey, ContentProvider, Day, ValentineContent};
pub use error::{LifecycleError, ViewError};
pub use flow::{FlowController, FlowVariant, NavEvent, Screen, Transition};
pub use name::{code_from_link, code_from_location, decode_name};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Hearts needed to unlock the completion screen
    pub const TARGET_SCORE: u32 = 15;

    /// Spawn interval at score 0 (ms)
    pub const SPAWN_BASE_INTERVAL_MS: u64 = 800;
    /// Interval shaved off per point scored (ms)
    pub const SPAWN_DECAY_PER_POINT_MS: u64 = 20;
    /// Maximum total interval reduction (ms)
    pub const SPAWN_MAX_DECAY_MS: u64 = 400;
    /// Spawn interval never drops below this (ms)
    pub const SPAWN_MIN_INTERVAL_MS: u64 = 100;

    /// Horizontal spawn range, percent of play-area width
    pub const SPAWN_X_MIN: f32 = 5.0;
    pub const SPAWN_X_MAX: f32 = 90.0;
    /// Time for a heart to cross the play area (seconds)
    pub const FALL_SECS_MIN: f32 = 3.0;
    pub const FALL_SECS_MAX: f32 = 7.0;
    /// Cosmetic glyph size (px)
    pub const SIZE_MIN: f32 = 32.0;
    pub const SIZE_MAX: f32 = 56.0;

    /// Timer firings one `advance` call may replay before resyncing to now
    pub const MAX_CATCHUP_STEPS: u32 = 64;

    /// Boundary sweep cadence (ms)
    pub const SWEEP_INTERVAL_MS: u64 = 500;
    /// Fall progress at which an uncaught heart counts as missed
    pub const MISS_THRESHOLD: f32 = 1.0;

    /// Catches closer together than this keep the combo alive (ms)
    pub const COMBO_TIMEOUT_MS: u64 = 1200;
    /// Multiplier gained for every two streak catches
    pub const MULTIPLIER_STEP: f32 = 0.5;
    /// Multiplier ceiling
    pub const MULTIPLIER_CAP: f32 = 3.0;

    /// Number of cosmetic glyph kinds a heart can take
    pub const OBJECT_KINDS: u8 = 7;
}
