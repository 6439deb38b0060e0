//! Screen flow
//!
//! A small state machine sequencing the experience:
//!
//! ```text
//! Intro --Start--> WeekMenu --SelectDay--> DayDetail
//!   |                 ^  |                    |
//!   |                 |  +------Back----------+
//!   +--Play----+      |
//!              v      |Play
//!            Playing <+
//!              |
//!              +--session completes--> Complete (terminal)
//! ```
//!
//! In the minimal variant `Start` goes straight from Intro to Playing.
//! Every (screen, event) pair is defined: pairs without an edge leave the
//! screen unchanged. The controller owns the live `GameSession`; leaving
//! `Playing` drops it, and its timers with it.

use crate::content::{ContentKey, ContentProvider, Day, ValentineContent, format_message};
use crate::name::decode_name;
use crate::sim::{GameEvent, GameSession, SessionState};
use crate::tuning::Tuning;

/// Which route the intro takes into the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowVariant {
    /// Intro -> Playing -> Complete
    Minimal,
    /// Intro -> WeekMenu (-> DayDetail) -> Playing -> Complete
    #[default]
    Week,
}

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    WeekMenu,
    DayDetail(Day),
    Playing,
    Complete,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Intro => "intro",
            Screen::WeekMenu => "week_menu",
            Screen::DayDetail(_) => "day_detail",
            Screen::Playing => "playing",
            Screen::Complete => "complete",
        }
    }

    /// The day on screen, for `DayDetail`
    pub fn day(&self) -> Option<Day> {
        match self {
            Screen::DayDetail(day) => Some(*day),
            _ => None,
        }
    }
}

/// User navigation and engine signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// "Play Now" on the intro
    Start,
    /// A day tile on the week menu
    SelectDay(Day),
    /// Back out of a day
    Back,
    /// "Play" from the week menu (or intro)
    Play,
    /// The running session reached its target
    SessionComplete,
    /// Leave the game before finishing
    Abandon,
}

/// Outcome of feeding an event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Screen, to: Screen },
    Ignored,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

pub struct FlowController<C: ContentProvider = ValentineContent> {
    variant: FlowVariant,
    screen: Screen,
    content: C,
    name: String,
    tuning: Tuning,
    base_seed: u64,
    runs: u64,
    session: Option<GameSession>,
    final_state: Option<SessionState>,
    /// Events a completed session emitted before it was retired
    pending_events: Vec<GameEvent>,
    message_index: usize,
    show_activities: bool,
}

impl FlowController<ValentineContent> {
    /// Built-in content, default tuning, name decoded from a shared code
    pub fn valentine(variant: FlowVariant, name_code: Option<&str>, seed: u64) -> Self {
        Self::new(
            variant,
            ValentineContent,
            decode_name(name_code),
            Tuning::default(),
            seed,
        )
    }
}

impl<C: ContentProvider> FlowController<C> {
    pub fn new(variant: FlowVariant, content: C, name: String, tuning: Tuning, seed: u64) -> Self {
        Self {
            variant,
            screen: Screen::Intro,
            content,
            name,
            tuning,
            base_seed: seed,
            runs: 0,
            session: None,
            final_state: None,
            pending_events: Vec::new(),
            message_index: 0,
            show_activities: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// The running session, only while `Playing`
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Final tally of the finished session, once `Complete`
    pub fn final_state(&self) -> Option<&SessionState> {
        self.final_state.as_ref()
    }

    /// Apply a navigation event at `now_ms`
    pub fn handle(&mut self, event: NavEvent, now_ms: u64) -> Transition {
        let next = match (self.screen, event) {
            (Screen::Intro, NavEvent::Start) => match self.variant {
                FlowVariant::Minimal => Some(Screen::Playing),
                FlowVariant::Week => Some(Screen::WeekMenu),
            },
            (Screen::Intro, NavEvent::Play) => Some(Screen::Playing),
            (Screen::WeekMenu, NavEvent::SelectDay(day)) => Some(Screen::DayDetail(day)),
            (Screen::WeekMenu, NavEvent::Play) => Some(Screen::Playing),
            (Screen::DayDetail(_), NavEvent::Back) => Some(Screen::WeekMenu),
            (Screen::Playing, NavEvent::SessionComplete) if self.session_complete() => {
                Some(Screen::Complete)
            }
            (Screen::Playing, NavEvent::Abandon) => match self.variant {
                FlowVariant::Minimal => Some(Screen::Intro),
                FlowVariant::Week => Some(Screen::WeekMenu),
            },
            _ => None,
        };

        match next {
            Some(to) => self.enter(to, now_ms),
            None => {
                log::debug!("{:?} ignored on {:?}", event, self.screen);
                Transition::Ignored
            }
        }
    }

    /// Leave the game early (Playing -> menu or intro)
    pub fn abandon_game(&mut self, now_ms: u64) -> Transition {
        self.handle(NavEvent::Abandon, now_ms)
    }

    /// Drive the session's timers. Completion moves the flow on.
    pub fn advance(&mut self, now_ms: u64) {
        if let Some(session) = self.session.as_mut() {
            session.advance(now_ms);
        }
        self.follow_completion(now_ms);
    }

    /// Forward a tap on heart `id`. Returns points awarded.
    pub fn catch(&mut self, id: u32, now_ms: u64) -> Option<u32> {
        let points = self.session.as_mut()?.handle_catch(id, now_ms);
        self.follow_completion(now_ms);
        points
    }

    /// Forward a boundary exit reported by the render layer
    pub fn miss(&mut self, id: u32) -> bool {
        self.session.as_mut().is_some_and(|s| s.handle_miss(id))
    }

    /// Events from the running session since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        if let Some(session) = self.session.as_mut() {
            events.extend(session.drain_events());
        }
        events
    }

    /// The message the current screen is showing, with the name filled in
    pub fn current_message(&self) -> Option<String> {
        let key = self.content_key()?;
        let token = self.content.name_token();
        let messages = self.content.messages(key);
        let template = messages.get(self.message_index % messages.len().max(1))?;
        Some(format_message(template, token, &self.name))
    }

    /// Show the next message, wrapping around. False on screens without messages.
    pub fn cycle_message(&mut self) -> bool {
        let Some(key) = self.content_key() else {
            return false;
        };
        let len = self.content.messages(key).len();
        if len == 0 {
            return false;
        }
        self.message_index = (self.message_index + 1) % len;
        true
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    /// Open or close the activity ideas panel on a day screen
    pub fn toggle_activities(&mut self) -> bool {
        if !matches!(self.screen, Screen::DayDetail(_)) {
            return false;
        }
        self.show_activities = !self.show_activities;
        self.show_activities
    }

    pub fn activities_open(&self) -> bool {
        self.show_activities
    }

    /// Activity ideas, if the panel is open
    pub fn activities(&self) -> &[&str] {
        match self.screen {
            Screen::DayDetail(day) if self.show_activities => self.content.activities(day),
            _ => &[],
        }
    }

    /// Quote for the day on screen
    pub fn quote(&self) -> Option<&str> {
        match self.screen {
            Screen::DayDetail(day) => Some(self.content.quote(day)),
            _ => None,
        }
    }

    fn content_key(&self) -> Option<ContentKey> {
        match self.screen {
            Screen::DayDetail(day) => Some(ContentKey::Day(day)),
            Screen::Complete => Some(ContentKey::Completion),
            _ => None,
        }
    }

    fn session_complete(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_complete)
    }

    fn follow_completion(&mut self, now_ms: u64) {
        if self.screen == Screen::Playing && self.session_complete() {
            self.handle(NavEvent::SessionComplete, now_ms);
        }
    }

    fn enter(&mut self, to: Screen, now_ms: u64) -> Transition {
        let from = self.screen;

        // Leaving the game discards the session and every pending timer
        if from == Screen::Playing {
            if let Some(mut session) = self.session.take() {
                if session.is_complete() {
                    self.final_state = Some(session.state().clone());
                    self.pending_events = session.drain_events();
                } else {
                    log::info!("Session abandoned at score {}", session.score());
                }
            }
        }

        if to == Screen::Playing {
            let seed = self.base_seed.wrapping_add(self.runs);
            self.runs += 1;
            self.session = Some(GameSession::start(self.tuning.clone(), seed, now_ms));
        }

        self.message_index = 0;
        self.show_activities = false;
        self.screen = to;
        log::info!("Screen {:?} -> {:?}", from, to);
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> FlowController {
        FlowController::valentine(FlowVariant::Week, None, 1)
    }

    #[test]
    fn test_week_route() {
        let mut flow = week();
        assert_eq!(flow.screen(), Screen::Intro);
        assert!(flow.handle(NavEvent::Start, 0).moved());
        assert_eq!(flow.screen(), Screen::WeekMenu);
        flow.handle(NavEvent::SelectDay(Day::Hug), 0);
        assert_eq!(flow.screen(), Screen::DayDetail(Day::Hug));
        flow.handle(NavEvent::Back, 0);
        assert_eq!(flow.screen(), Screen::WeekMenu);
        flow.handle(NavEvent::Play, 0);
        assert_eq!(flow.screen(), Screen::Playing);
        assert!(flow.session().is_some());
    }

    #[test]
    fn test_minimal_route() {
        let mut flow = FlowController::valentine(FlowVariant::Minimal, None, 1);
        flow.handle(NavEvent::Start, 0);
        assert_eq!(flow.screen(), Screen::Playing);
    }

    #[test]
    fn test_undefined_pairs_are_ignored() {
        let mut flow = week();
        assert_eq!(flow.handle(NavEvent::Back, 0), Transition::Ignored);
        assert_eq!(flow.handle(NavEvent::SessionComplete, 0), Transition::Ignored);
        flow.handle(NavEvent::Start, 0);
        flow.handle(NavEvent::Play, 0);
        // Completion signal without a finished session does nothing
        assert_eq!(flow.handle(NavEvent::SessionComplete, 0), Transition::Ignored);
        assert_eq!(flow.screen(), Screen::Playing);
    }

    #[test]
    fn test_day_messages_cycle_and_reset() {
        let mut flow = FlowController::valentine(FlowVariant::Week, Some("Uml5YQ=="), 1);
        assert_eq!(flow.current_message(), None);
        assert!(!flow.cycle_message());

        flow.handle(NavEvent::Start, 0);
        flow.handle(NavEvent::SelectDay(Day::Propose), 0);
        assert_eq!(flow.current_message().as_deref(), Some("Riya, will you be my forever? 💍"));
        let len = flow.content().messages(ContentKey::Day(Day::Propose)).len();
        for _ in 0..len {
            assert!(flow.cycle_message());
        }
        assert_eq!(flow.message_index(), 0);

        flow.cycle_message();
        flow.handle(NavEvent::Back, 0);
        flow.handle(NavEvent::SelectDay(Day::Rose), 0);
        assert_eq!(flow.message_index(), 0);
    }

    #[test]
    fn test_activities_panel() {
        let mut flow = week();
        assert!(!flow.toggle_activities());
        flow.handle(NavEvent::Start, 0);
        flow.handle(NavEvent::SelectDay(Day::Teddy), 0);
        assert!(flow.activities().is_empty());
        assert!(flow.toggle_activities());
        assert!(!flow.activities().is_empty());
        assert!(flow.quote().is_some());
        flow.handle(NavEvent::Back, 0);
        assert!(!flow.activities_open());
    }

    #[test]
    fn test_abandon_drops_session() {
        let mut flow = week();
        flow.handle(NavEvent::Start, 0);
        flow.handle(NavEvent::Play, 0);
        flow.advance(5_000);
        assert!(flow.abandon_game(5_000).moved());
        assert_eq!(flow.screen(), Screen::WeekMenu);
        assert!(flow.session().is_none());
        // Late input for the dead session goes nowhere
        assert_eq!(flow.catch(0, 5_100), None);
        assert!(!flow.miss(0));
        assert!(flow.drain_events().is_empty());
    }

    #[test]
    fn test_completion_moves_to_complete() {
        let tuning = Tuning::with_target(1);
        let mut flow = FlowController::new(
            FlowVariant::Minimal,
            ValentineContent,
            "Sam".to_string(),
            tuning,
            3,
        );
        flow.handle(NavEvent::Start, 0);
        flow.advance(800);
        let id = flow.session().and_then(|s| s.objects().next()).map(|o| o.id).unwrap();
        assert_eq!(flow.catch(id, 900), Some(1));

        assert_eq!(flow.screen(), Screen::Complete);
        assert!(
            flow.drain_events()
                .contains(&GameEvent::Completed { score: 1 })
        );
        assert!(flow.session().is_none());
        assert_eq!(flow.final_state().map(|s| s.score), Some(1));
        assert!(flow.current_message().is_some());

        // Terminal
        for event in [NavEvent::Start, NavEvent::Play, NavEvent::Back, NavEvent::Abandon] {
            assert_eq!(flow.handle(event, 1000), Transition::Ignored);
        }
    }
}
