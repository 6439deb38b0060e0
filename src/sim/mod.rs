//! Deterministic mini-game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied millisecond clock only
//! - Seeded RNG only
//! - Stable iteration order (by object ID)
//! - No rendering or platform dependencies

pub mod combo;
pub mod event;
pub mod lifecycle;
pub mod session;
pub mod spawner;
pub mod state;
pub mod timer;

pub use combo::{ComboEngine, ComboState};
pub use event::GameEvent;
pub use lifecycle::ObjectTracker;
pub use session::GameSession;
pub use spawner::Spawner;
pub use state::{FallingObject, RngState, SessionPhase, SessionState, spawn_object};
pub use timer::Timer;
