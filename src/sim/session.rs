//! Game session controller
//!
//! Runs one round of the mini-game: drives the spawner, the boundary sweep
//! and the combo-decay timer off a caller-supplied millisecond clock, feeds
//! catches into scoring, and freezes itself the moment the target is hit.
//!
//! Timers live inside the session. Dropping the session (navigating away)
//! drops them with it, so a discarded session can never be mutated again.

use rand_pcg::Pcg32;

use super::combo::{ComboEngine, ComboState};
use super::event::GameEvent;
use super::lifecycle::ObjectTracker;
use super::spawner::Spawner;
use super::state::{FallingObject, RngState, SessionPhase, SessionState, spawn_object};
use super::timer::Timer;
use crate::tuning::Tuning;

/// Which timer is due next. Declaration order breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Due {
    ComboDecay,
    Sweep,
    Spawn,
}

pub struct GameSession {
    tuning: Tuning,
    rng_state: RngState,
    rng: Pcg32,
    state: SessionState,
    tracker: ObjectTracker,
    spawner: Spawner,
    combo: ComboEngine,
    sweep: Timer,
    /// Latest sim time processed; never moves backwards
    clock_ms: u64,
    /// Emitted since the last `drain_events`. Grows by one entry per spawn,
    /// so callers must drain it every frame.
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Begin a session at `now_ms` with the given tuning and RNG seed
    pub fn start(tuning: Tuning, seed: u64, now_ms: u64) -> Self {
        let rng_state = RngState::new(seed);
        let rng = rng_state.to_rng();
        let mut session = Self {
            state: SessionState::new(tuning.target_score),
            tracker: ObjectTracker::new(),
            spawner: Spawner::new(),
            combo: ComboEngine::new(&tuning),
            sweep: Timer::idle(),
            clock_ms: now_ms,
            events: Vec::new(),
            tuning,
            rng_state,
            rng,
        };

        let sweep_every = session.sweep_interval();
        session.spawner.start(now_ms, 0, &session.tuning);
        session.sweep.arm(now_ms, sweep_every);

        log::info!(
            "Session started: target={}, seed={}",
            session.state.target_score,
            seed
        );
        session
    }

    /// Default tuning, custom goal
    pub fn with_target(target_score: u32, seed: u64, now_ms: u64) -> Self {
        Self::start(Tuning::with_target(target_score), seed, now_ms)
    }

    /// Process every timer due up to `now_ms`, in deadline order.
    ///
    /// At most `max_catchup_steps` deadlines are replayed per call. A larger
    /// clock jump skips the backlog and resyncs the timers to `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        if self.is_complete() {
            return;
        }
        let now = self.sync_clock(now_ms);

        let mut steps = 0;
        while let Some((due, which)) = self.next_due(now) {
            if steps >= self.tuning.max_catchup_steps {
                self.resync(now);
                return;
            }
            steps += 1;
            match which {
                Due::ComboDecay => {
                    if let Some(streak) = self.combo.poll_decay(due) {
                        log::debug!("Combo expired at streak {}", streak);
                        self.events.push(GameEvent::ComboExpired { streak });
                    }
                }
                Due::Sweep => {
                    let sweep_every = self.sweep_interval();
                    self.sweep.fire(due);
                    self.sweep.arm(due, sweep_every);
                    for object in self.tracker.sweep(due, self.tuning.miss_threshold) {
                        self.record_miss(&object);
                    }
                }
                Due::Spawn => {
                    if let Some(object) =
                        self.spawner
                            .tick(due, self.state.score, &mut self.rng, &self.tuning)
                    {
                        self.register(object);
                    }
                }
            }
        }
    }

    /// User tapped heart `id` at `now_ms`. Returns the points awarded, or
    /// `None` if the heart is already gone or the session is frozen.
    pub fn handle_catch(&mut self, id: u32, now_ms: u64) -> Option<u32> {
        if self.is_complete() {
            log::warn!("Catch of {} ignored: session complete", id);
            return None;
        }

        // Anything that crossed before this tap is swept first
        self.advance(now_ms);
        let now = self.clock_ms;

        if !self.tracker.contains(id) {
            log::debug!("Stale catch of {} ignored", id);
            return None;
        }
        let points = self.combo.on_catch(now);
        let object = self.tracker.remove(id)?;

        self.state.score += points;
        self.state.catches += 1;
        let combo = self.combo.state();
        log::debug!(
            "Caught {}: +{} (streak {}, x{})",
            id,
            points,
            combo.streak,
            combo.multiplier
        );
        self.events.push(GameEvent::Caught {
            id,
            points,
            streak: combo.streak,
            multiplier: combo.multiplier,
            score: self.state.score,
            x: object.x,
        });

        if self.state.target_reached() {
            self.complete();
        }
        Some(points)
    }

    /// Heart `id` left the play area. Returns false for stale reports.
    pub fn handle_miss(&mut self, id: u32) -> bool {
        if self.is_complete() {
            return false;
        }
        match self.tracker.remove(id) {
            Some(object) => {
                self.record_miss(&object);
                true
            }
            None => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase == SessionPhase::Complete
    }

    /// Spawn a heart immediately, outside the spawn timer. Returns its id.
    pub fn spawn_now(&mut self, now_ms: u64) -> Option<u32> {
        if self.is_complete() {
            return None;
        }
        self.advance(now_ms);
        let id = self.spawner.next_object_id();
        let object = spawn_object(&mut self.rng, id, self.clock_ms, &self.tuning);
        self.register(object);
        Some(id)
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn combo(&self) -> ComboState {
        self.combo.state()
    }

    /// Active hearts in id order
    pub fn objects(&self) -> impl Iterator<Item = &FallingObject> {
        self.tracker.iter()
    }

    pub fn object(&self, id: u32) -> Option<&FallingObject> {
        self.tracker.get(id)
    }

    pub fn active_count(&self) -> usize {
        self.tracker.len()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Whether any of the spawn, sweep or combo-decay timers is pending
    pub fn timers_armed(&self) -> bool {
        self.spawner.is_running() || self.sweep.is_armed() || self.combo.decay_due_at().is_some()
    }

    /// Drop the missed-deadline backlog: expire the combo, sweep once at
    /// `now_ms` and schedule the next spawn and sweep from there
    fn resync(&mut self, now_ms: u64) {
        log::warn!(
            "Timer backlog exceeded {} steps; resyncing to {} ms",
            self.tuning.max_catchup_steps,
            now_ms
        );
        if let Some(streak) = self.combo.poll_decay(now_ms) {
            self.events.push(GameEvent::ComboExpired { streak });
        }
        let sweep_every = self.sweep_interval();
        self.sweep.arm(now_ms, sweep_every);
        for object in self.tracker.sweep(now_ms, self.tuning.miss_threshold) {
            self.record_miss(&object);
        }
        if self.spawner.is_running() {
            self.spawner.start(now_ms, self.state.score, &self.tuning);
        }
    }

    fn sync_clock(&mut self, now_ms: u64) -> u64 {
        self.clock_ms = self.clock_ms.max(now_ms);
        self.clock_ms
    }

    fn sweep_interval(&self) -> u64 {
        self.tuning.sweep_interval_ms.max(1)
    }

    fn next_due(&self, now_ms: u64) -> Option<(u64, Due)> {
        [
            (self.combo.decay_due_at(), Due::ComboDecay),
            (self.sweep.due_at(), Due::Sweep),
            (self.spawner.due_at(), Due::Spawn),
        ]
        .into_iter()
        .filter_map(|(due, which)| due.filter(|&d| d <= now_ms).map(|d| (d, which)))
        .min_by_key(|&(due, _)| due)
    }

    fn register(&mut self, object: FallingObject) {
        let event = GameEvent::Spawned {
            id: object.id,
            x: object.x,
            kind: object.kind,
            size: object.size,
            fall_secs: object.fall_secs,
        };
        match self.tracker.register(object) {
            Ok(()) => self.events.push(event),
            Err(err) => {
                log::error!("Spawn rejected: {}", err);
                debug_assert!(false, "spawner produced a duplicate id: {err}");
            }
        }
    }

    fn record_miss(&mut self, object: &FallingObject) {
        self.combo.on_miss();
        self.state.misses += 1;
        log::debug!("Missed {} (misses {})", object.id, self.state.misses);
        self.events.push(GameEvent::Missed { id: object.id });
    }

    fn complete(&mut self) {
        self.state.phase = SessionPhase::Complete;
        self.spawner.stop();
        self.sweep.cancel();
        self.combo.cancel_decay();
        self.tracker.clear();
        log::info!(
            "Session complete: score={} catches={} misses={}",
            self.state.score,
            self.state.catches,
            self.state.misses
        );
        self.events.push(GameEvent::Completed {
            score: self.state.score,
        });
    }
}
