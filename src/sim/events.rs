//! Notifications from the simulation to whatever presents it
//!
//! The simulation never touches the screen or speakers. It queues
//! `GameEvent`s, and the front-end drains them once per frame into a
//! `PresentationSink`.

use serde::{Deserialize, Serialize};

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u64),
    LivesChanged(u8),
    /// Successful catch cue, shown for `duration_ms`
    CatchFlash { duration_ms: u32 },
    /// Lost-life cue, shown for `duration_ms`
    MissFlash { duration_ms: u32 },
    GameOver,
    Restart,
}

/// Receives presentation notifications. Implementations must not panic.
pub trait PresentationSink {
    fn on_score_changed(&mut self, score: u64);
    fn on_lives_changed(&mut self, lives: u8);
    fn on_catch_flash(&mut self, duration_ms: u32);
    fn on_miss_flash(&mut self, duration_ms: u32);
    fn on_game_over(&mut self);
    fn on_restart(&mut self);
}

impl GameEvent {
    /// Route this event to the matching sink callback
    pub fn dispatch(&self, sink: &mut dyn PresentationSink) {
        match *self {
            GameEvent::ScoreChanged(score) => sink.on_score_changed(score),
            GameEvent::LivesChanged(lives) => sink.on_lives_changed(lives),
            GameEvent::CatchFlash { duration_ms } => sink.on_catch_flash(duration_ms),
            GameEvent::MissFlash { duration_ms } => sink.on_miss_flash(duration_ms),
            GameEvent::GameOver => sink.on_game_over(),
            GameEvent::Restart => sink.on_restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        calls: Vec<&'static str>,
        last_score: u64,
        last_flash: u32,
    }

    impl PresentationSink for Tally {
        fn on_score_changed(&mut self, score: u64) {
            self.calls.push("score");
            self.last_score = score;
        }
        fn on_lives_changed(&mut self, _lives: u8) {
            self.calls.push("lives");
        }
        fn on_catch_flash(&mut self, duration_ms: u32) {
            self.calls.push("catch");
            self.last_flash = duration_ms;
        }
        fn on_miss_flash(&mut self, _duration_ms: u32) {
            self.calls.push("miss");
        }
        fn on_game_over(&mut self) {
            self.calls.push("over");
        }
        fn on_restart(&mut self) {
            self.calls.push("restart");
        }
    }

    #[test]
    fn test_dispatch_routes_each_variant() {
        let mut sink = Tally::default();
        let events = [
            GameEvent::ScoreChanged(4),
            GameEvent::CatchFlash { duration_ms: 300 },
            GameEvent::LivesChanged(2),
            GameEvent::MissFlash { duration_ms: 300 },
            GameEvent::GameOver,
            GameEvent::Restart,
        ];
        for event in &events {
            event.dispatch(&mut sink);
        }
        assert_eq!(sink.calls, ["score", "catch", "lives", "miss", "over", "restart"]);
        assert_eq!(sink.last_score, 4);
        assert_eq!(sink.last_flash, 300);
    }
}
