//! Read-only view models handed to the render layer

use serde::Serialize;

use crate::content::{ContentProvider, Day};
use crate::error::ViewError;
use crate::flow::FlowController;
use crate::sim::{FallingObject, GameSession};

/// One heart as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectView {
    pub id: u32,
    /// Percent of play-area width
    pub x: f32,
    /// Fraction of the play area crossed
    pub y: f32,
    pub size: f32,
    pub kind: u8,
}

impl ObjectView {
    pub fn from_object(object: &FallingObject, now_ms: u64) -> Self {
        Self {
            id: object.id,
            x: object.x,
            y: object.fall_progress(now_ms),
            size: object.size,
            kind: object.kind,
        }
    }
}

/// HUD plus hearts for the game screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub score: u32,
    pub target: u32,
    pub progress: f32,
    pub streak: u32,
    pub multiplier: f32,
    pub misses: u32,
    pub complete: bool,
    pub objects: Vec<ObjectView>,
}

impl SessionView {
    pub fn from_session(session: &GameSession) -> Self {
        let state = session.state();
        let combo = session.combo();
        let now = session.now_ms();
        Self {
            score: state.score,
            target: state.target_score,
            progress: state.progress(),
            streak: combo.streak,
            multiplier: combo.multiplier,
            misses: state.misses,
            complete: session.is_complete(),
            objects: session
                .objects()
                .map(|o| ObjectView::from_object(o, now))
                .collect(),
        }
    }
}

/// Everything needed to draw the current screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    pub screen: &'static str,
    pub day: Option<Day>,
    pub name: String,
    pub message: Option<String>,
    pub quote: Option<String>,
    pub activities: Vec<String>,
    pub session: Option<SessionView>,
    pub final_score: Option<u32>,
}

impl ScreenView {
    pub fn from_flow<C: ContentProvider>(flow: &FlowController<C>) -> Self {
        Self {
            screen: flow.screen().as_str(),
            day: flow.screen().day(),
            name: flow.name().to_string(),
            message: flow.current_message(),
            quote: flow.quote().map(str::to_string),
            activities: flow.activities().iter().map(|a| a.to_string()).collect(),
            session: flow.session().map(SessionView::from_session),
            final_score: flow.final_state().map(|s| s.score),
        }
    }

    pub fn to_json(&self) -> Result<String, ViewError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{FlowVariant, NavEvent};

    #[test]
    fn test_session_view_tracks_hearts() {
        let mut session = GameSession::with_target(15, 5, 0);
        session.advance(2_000);
        let view = SessionView::from_session(&session);
        assert_eq!(view.objects.len(), session.active_count());
        assert_eq!(view.score, 0);
        assert_eq!(view.multiplier, 1.0);
        assert!(view.objects.iter().all(|o| o.y >= 0.0 && o.y < 1.0));
    }

    #[test]
    fn test_screen_view_json() {
        let mut flow = FlowController::valentine(FlowVariant::Week, None, 1);
        flow.handle(NavEvent::Start, 0);
        flow.handle(NavEvent::SelectDay(Day::Kiss), 0);
        let json = ScreenView::from_flow(&flow).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["screen"], "day_detail");
        assert_eq!(value["day"], "kiss");
        assert_eq!(value["name"], "My Love");
        assert!(value["session"].is_null());
    }
}
