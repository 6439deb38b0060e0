//! Events emitted by a session for the render layer (pops, HUD flashes)

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new heart entered at the top
    Spawned { id: u32, x: f32, kind: u8, size: f32, fall_secs: f32 },
    /// A heart was caught; `points` is what the "+N" pop should show
    Caught {
        id: u32,
        points: u32,
        streak: u32,
        multiplier: f32,
        score: u32,
        x: f32,
    },
    /// A heart fell out uncaught
    Missed { id: u32 },
    /// A combo streak timed out
    ComboExpired { streak: u32 },
    /// Target reached (emitted once per session)
    Completed { score: u32 },
}
