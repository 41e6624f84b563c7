//! Session scoring and lives
//!
//! The session is the only thing that changes score or lives. Whether the
//! game is still on is read straight off the life count, so the two can
//! never disagree.

use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, Outcome};
use super::events::GameEvent;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Out of lives, waiting for restart
    Over,
}

/// Score and lives for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub lives: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        if self.lives == 0 {
            GamePhase::Over
        } else {
            GamePhase::Running
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase() == GamePhase::Running
    }

    /// Apply a resolved entity outcome, queueing notifications.
    ///
    /// Returns true if this outcome ended the session. Outcomes arriving
    /// after the session is over are dropped.
    pub fn apply_outcome(&mut self, kind: EntityKind, outcome: Outcome, events: &mut Vec<GameEvent>) -> bool {
        if !self.is_running() {
            log::debug!("Ignoring {:?} {:?} after game over", kind, outcome);
            return false;
        }

        match (outcome, kind) {
            (Outcome::Falling, _) => return false,
            (Outcome::Caught, EntityKind::Normal) => {
                self.score += 1;
                events.push(GameEvent::ScoreChanged(self.score));
                events.push(GameEvent::CatchFlash { duration_ms: FLASH_MS });
            }
            (Outcome::Caught, EntityKind::Hazard) | (Outcome::MissedBottom, EntityKind::Normal) => {
                return self.lose_life(events);
            }
            (Outcome::Caught, EntityKind::Heal) => {
                self.lives = self.lives.saturating_add(1).min(MAX_LIVES);
                events.push(GameEvent::LivesChanged(self.lives));
            }
            // Bombs and hearts falling off screen cost and give nothing
            (Outcome::MissedBottom, EntityKind::Hazard | EntityKind::Heal) => {}
        }
        false
    }

    fn lose_life(&mut self, events: &mut Vec<GameEvent>) -> bool {
        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LivesChanged(self.lives));
        events.push(GameEvent::MissFlash { duration_ms: FLASH_MS });

        if self.lives == 0 {
            log::info!("Game over - final score {}", self.score);
            events.push(GameEvent::GameOver);
            return true;
        }
        false
    }

    /// Start a fresh run. Allowed from either phase.
    pub fn restart(&mut self, events: &mut Vec<GameEvent>) {
        if self.is_running() {
            log::debug!("Restart requested while running - resetting anyway");
        }
        *self = Self::new();
        events.push(GameEvent::Restart);
        events.push(GameEvent::ScoreChanged(self.score));
        events.push(GameEvent::LivesChanged(self.lives));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, 3);
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_normal_catch_scores() {
        let mut session = Session::new();
        let mut events = Vec::new();
        let ended = session.apply_outcome(EntityKind::Normal, Outcome::Caught, &mut events);
        assert!(!ended);
        assert_eq!(session.score, 1);
        assert_eq!(session.lives, 3);
        assert_eq!(
            events,
            [GameEvent::ScoreChanged(1), GameEvent::CatchFlash { duration_ms: FLASH_MS }]
        );
    }

    #[test]
    fn test_hazard_catch_costs_life() {
        let mut session = Session::new();
        let mut events = Vec::new();
        session.apply_outcome(EntityKind::Hazard, Outcome::Caught, &mut events);
        assert_eq!(session.lives, 2);
        assert_eq!(session.score, 0);
        assert_eq!(
            events,
            [GameEvent::LivesChanged(2), GameEvent::MissFlash { duration_ms: FLASH_MS }]
        );
    }

    #[test]
    fn test_normal_miss_costs_life() {
        let mut session = Session::new();
        let mut events = Vec::new();
        session.apply_outcome(EntityKind::Normal, Outcome::MissedBottom, &mut events);
        assert_eq!(session.lives, 2);
    }

    #[test]
    fn test_hazard_and_heal_misses_are_free() {
        let mut session = Session::new();
        let mut events = Vec::new();
        session.apply_outcome(EntityKind::Hazard, Outcome::MissedBottom, &mut events);
        session.apply_outcome(EntityKind::Heal, Outcome::MissedBottom, &mut events);
        assert_eq!(session, Session::new());
        assert!(events.is_empty());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut session = Session { score: 0, lives: 4 };
        let mut events = Vec::new();
        session.apply_outcome(EntityKind::Heal, Outcome::Caught, &mut events);
        assert_eq!(session.lives, 5);
        session.apply_outcome(EntityKind::Heal, Outcome::Caught, &mut events);
        assert_eq!(session.lives, 5);
        assert_eq!(events, [GameEvent::LivesChanged(5), GameEvent::LivesChanged(5)]);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut session = Session { score: 7, lives: 1 };
        let mut events = Vec::new();
        let ended = session.apply_outcome(EntityKind::Hazard, Outcome::Caught, &mut events);
        assert!(ended);
        assert_eq!(session.lives, 0);
        assert_eq!(session.phase(), GamePhase::Over);
        assert_eq!(events.last(), Some(&GameEvent::GameOver));
    }

    #[test]
    fn test_outcomes_after_game_over_are_ignored() {
        let mut session = Session { score: 7, lives: 0 };
        let mut events = Vec::new();
        assert!(!session.apply_outcome(EntityKind::Heal, Outcome::Caught, &mut events));
        assert!(!session.apply_outcome(EntityKind::Normal, Outcome::Caught, &mut events));
        assert_eq!(session, Session { score: 7, lives: 0 });
        assert!(events.is_empty());
    }

    #[test]
    fn test_restart_from_over_and_running() {
        let mut session = Session { score: 12, lives: 0 };
        let mut events = Vec::new();
        session.restart(&mut events);
        assert_eq!(session, Session::new());
        assert!(session.is_running());
        assert_eq!(
            events,
            [GameEvent::Restart, GameEvent::ScoreChanged(0), GameEvent::LivesChanged(3)]
        );

        let mut session = Session { score: 4, lives: 2 };
        session.restart(&mut events);
        assert_eq!(session, Session::new());
    }
}
