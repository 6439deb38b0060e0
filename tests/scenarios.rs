//! End-to-end scoring scenarios against the public session and flow APIs

use catch_my_love::content::Day;
use catch_my_love::flow::{FlowController, FlowVariant, NavEvent, Screen};
use catch_my_love::name::code_from_link;
use catch_my_love::sim::{GameEvent, GameSession};

fn completions(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::Completed { .. }))
        .count()
}

#[test]
fn test_slow_catches_never_combo() {
    let mut session = GameSession::with_target(15, 11, 0);
    let mut events = Vec::new();

    for i in 0..15u64 {
        let t = i * 1200;
        assert!(!session.is_complete(), "completed early at catch {}", i);
        let id = session.spawn_now(t).unwrap();
        assert_eq!(session.handle_catch(id, t), Some(1));
        assert_eq!(session.combo().multiplier, 1.0);
        assert_eq!(session.combo().streak, 1);
        events.extend(session.drain_events());
    }

    assert_eq!(session.score(), 15);
    assert!(session.is_complete());
    assert_eq!(completions(&events), 1);
    assert!(matches!(events.last(), Some(GameEvent::Completed { score: 15 })));
}

/// Four catches 300 ms apart. The multiplier follows
/// `min(1 + floor(streak / 2) * 0.5, 3.0)`, giving 1, 1.5, 1.5, 2 and a
/// total of 7. A reading of 1, 1, 1.5, 1.5 (total 6) would disagree with
/// that formula and with the two-catch case in `test_miss_breaks_combo`.
#[test]
fn test_rapid_catches_follow_multiplier_formula() {
    let mut session = GameSession::with_target(100, 11, 0);
    let ids: Vec<u32> = (0..4).filter_map(|_| session.spawn_now(0)).collect();

    let mut streaks = Vec::new();
    let mut multipliers = Vec::new();
    let mut points = Vec::new();
    for (i, id) in ids.into_iter().enumerate() {
        let t = 1000 + i as u64 * 300;
        points.push(session.handle_catch(id, t).unwrap());
        streaks.push(session.combo().streak);
        multipliers.push(session.combo().multiplier);
    }

    assert_eq!(streaks, vec![1, 2, 3, 4]);
    assert_eq!(multipliers, vec![1.0, 1.5, 1.5, 2.0]);
    assert_eq!(points, vec![1, 2, 2, 2]);
    assert_eq!(session.score(), 7);
}

#[test]
fn test_miss_breaks_combo() {
    let mut session = GameSession::with_target(100, 11, 0);
    let a = session.spawn_now(0).unwrap();
    let b = session.spawn_now(0).unwrap();
    let c = session.spawn_now(0).unwrap();
    let d = session.spawn_now(0).unwrap();

    session.handle_catch(a, 100);
    session.handle_catch(b, 300);
    assert_eq!(session.combo().streak, 2);
    assert_eq!(session.combo().multiplier, 1.5);

    assert!(session.handle_miss(c));
    assert_eq!(session.handle_catch(d, 400), Some(1));
    assert_eq!(session.combo().streak, 1);
    assert_eq!(session.combo().multiplier, 1.0);
}

#[test]
fn test_catch_after_sweep_is_ignored() {
    let mut session = GameSession::with_target(15, 11, 0);
    let id = session.spawn_now(0).unwrap();

    // Longest fall is 7s; the sweep at 7.5s has certainly claimed it
    session.advance(7_500);
    assert!(session.object(id).is_none());
    let misses = session.state().misses;

    assert_eq!(session.handle_catch(id, 7_600), None);
    assert_eq!(session.score(), 0);
    assert_eq!(session.state().misses, misses);
}

#[test]
fn test_auto_player_reaches_completion() {
    let mut flow = FlowController::valentine(FlowVariant::Week, Some("Uml5YQ=="), 14);
    flow.handle(NavEvent::Start, 0);
    flow.handle(NavEvent::SelectDay(Day::Rose), 0);
    flow.handle(NavEvent::Back, 0);
    flow.handle(NavEvent::Play, 0);

    let mut events = Vec::new();
    let mut now = 0;
    while flow.screen() == Screen::Playing && now < 120_000 {
        now += 350;
        flow.advance(now);
        let target = flow.session().and_then(|s| {
            s.objects()
                .max_by(|a, b| a.fall_progress(now).total_cmp(&b.fall_progress(now)))
                .map(|o| o.id)
        });
        if let Some(id) = target {
            flow.catch(id, now);
        }
        events.extend(flow.drain_events());
    }

    assert_eq!(flow.screen(), Screen::Complete);
    assert!(flow.final_state().is_some_and(|s| s.score >= 15));
    assert_eq!(completions(&events), 1);
    assert!(flow.current_message().is_some_and(|m| !m.contains("{{name}}")));
}

#[test]
fn test_escaped_link_names_the_recipient() {
    let code = code_from_link("/?code=Uml5YQ%3D%3D");
    let mut flow = FlowController::valentine(FlowVariant::Week, code.as_deref(), 1);
    flow.handle(NavEvent::Start, 0);
    flow.handle(NavEvent::SelectDay(Day::Rose), 0);
    assert!(flow.current_message().is_some_and(|m| m.contains("Riya")));
}
