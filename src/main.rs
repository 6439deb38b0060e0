//! Catch My Love entry point
//!
//! Native builds run a headless demo: an auto-player walks the week menu,
//! plays the mini-game and prints the unlocked love note.
//!
//! Usage: `catch-my-love [SEED] [LINK]`
//!
//! `LINK` is a shared link (`/play/CODE`, `/?code=CODE`) or a bare name code.

use catch_my_love::content::Day;
use catch_my_love::flow::{FlowController, FlowVariant, NavEvent, Screen};
use catch_my_love::name::code_from_link;
use catch_my_love::sim::GameEvent;
use catch_my_love::view::ScreenView;

/// Demo frame step (ms)
const FRAME_MS: u64 = 50;
/// Demo player reaction time between taps (ms)
const TAP_EVERY_MS: u64 = 350;
/// Give up after this much sim time (ms)
const DEMO_LIMIT_MS: u64 = 5 * 60 * 1000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(14);
    let code = args.next().as_deref().and_then(code_from_link);

    log::info!("Catch My Love (native demo) starting, seed {}", seed);
    let mut flow = FlowController::valentine(FlowVariant::Week, code.as_deref(), seed);

    flow.handle(NavEvent::Start, 0);
    flow.handle(NavEvent::SelectDay(Day::Valentine), 0);
    if let Some(message) = flow.current_message() {
        println!("{}", message);
    }
    flow.handle(NavEvent::Back, 0);
    flow.handle(NavEvent::Play, 0);

    let mut now = 0;
    let mut next_tap = TAP_EVERY_MS;
    while flow.screen() == Screen::Playing && now < DEMO_LIMIT_MS {
        now += FRAME_MS;
        flow.advance(now);

        if now >= next_tap {
            next_tap = now + TAP_EVERY_MS;
            // Tap the heart closest to the bottom
            let target = flow.session().and_then(|s| {
                s.objects()
                    .max_by(|a, b| a.fall_progress(now).total_cmp(&b.fall_progress(now)))
                    .map(|o| o.id)
            });
            if let Some(id) = target {
                flow.catch(id, now);
            }
        }

        for event in flow.drain_events() {
            match event {
                GameEvent::Caught { points, score, multiplier, .. } => {
                    println!("+{} (x{:.1}) score {}", points, multiplier, score)
                }
                GameEvent::Missed { id } => println!("missed heart {}", id),
                GameEvent::Completed { score } => println!("goal reached with {} points", score),
                _ => {}
            }
        }
    }

    if flow.screen() != Screen::Complete {
        log::warn!("Demo stopped before completion at {} ms", now);
        return;
    }

    println!("You caught them all!");
    match ScreenView::from_flow(&flow).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("View export failed: {}", e),
    }
}
