//! Headless front-end: runs the simulation without a screen
//!
//! Used by the native binary as a demo/soak run and by tests.

use serde::Serialize;

use crate::consts::STEP_MS;
use crate::sim::{PresentationSink, Session, TickInput, World, tick};
use crate::tuning::Ruleset;

/// Presentation sink that writes notifications to the log
#[derive(Debug, Default)]
pub struct LogSink {
    pub catches: u32,
    pub misses: u32,
    pub game_overs: u32,
}

impl PresentationSink for LogSink {
    fn on_score_changed(&mut self, score: u64) {
        log::debug!("Score: {}", score);
    }

    fn on_lives_changed(&mut self, lives: u8) {
        log::debug!("Lives: {}", lives);
    }

    fn on_catch_flash(&mut self, _duration_ms: u32) {
        self.catches += 1;
    }

    fn on_miss_flash(&mut self, _duration_ms: u32) {
        self.misses += 1;
    }

    fn on_game_over(&mut self) {
        self.game_overs += 1;
        log::info!("GAME OVER");
    }

    fn on_restart(&mut self) {
        log::info!("Restarted");
    }
}

/// Summary of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub seed: u64,
    pub ruleset: Ruleset,
    pub steps: u64,
    pub simulated_secs: f64,
    pub session: Session,
    pub catch_flashes: u32,
    pub miss_flashes: u32,
    pub peak_live: usize,
}

/// Play with the autopilot until game over or `max_steps` elapse
pub fn run_headless(seed: u64, ruleset: Ruleset, max_steps: u64) -> HeadlessReport {
    let mut world = World::new(seed, ruleset);
    let mut sink = LogSink::default();
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut peak_live = 0;
    while world.time_ticks < max_steps && world.session.is_running() {
        tick(&mut world, &input);
        world.dispatch_events(&mut sink);
        peak_live = peak_live.max(world.live_count());
    }

    HeadlessReport {
        seed,
        ruleset,
        steps: world.time_ticks,
        simulated_secs: world.time_ticks as f64 * STEP_MS / 1000.0,
        session: world.session.clone(),
        catch_flashes: sink.catches,
        miss_flashes: sink.misses,
        peak_live,
    }
}
