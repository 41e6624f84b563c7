//! Entity spawner: kind distribution and spawn cadence

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind};
use crate::consts::ENTITY_SIZE;
use crate::tuning::Ruleset;

/// Chance a spawn is a bomb
pub const HAZARD_CHANCE: f32 = 0.10;
/// Chance a spawn is a heart (rolled after the bomb band)
pub const HEAL_CHANCE: f32 = 0.05;
/// One spawn period
pub const SPAWN_PERIOD_MS: f64 = 1000.0;
/// Score at which a second entity joins every period
pub const SECOND_SPAWN_SCORE: u64 = 10;
/// Score at which a third entity joins every period
pub const THIRD_SPAWN_SCORE: u64 = 30;

/// Map a uniform roll in [0, 1) to a kind: 10% Hazard, 5% Heal, rest Normal
pub fn kind_for_roll(roll: f32) -> EntityKind {
    if roll < HAZARD_CHANCE {
        EntityKind::Hazard
    } else if roll < HAZARD_CHANCE + HEAL_CHANCE {
        EntityKind::Heal
    } else {
        EntityKind::Normal
    }
}

/// Entities per period. Thresholds are inclusive and stack.
pub fn spawns_for_score(score: u64) -> usize {
    let mut count = 1;
    if score >= SECOND_SPAWN_SCORE {
        count += 1;
    }
    if score >= THIRD_SPAWN_SCORE {
        count += 1;
    }
    count
}

/// Periodic entity factory
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Time accumulated toward the next period
    pub elapsed_ms: f64,
    pub ruleset: Ruleset,
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64, ruleset: Ruleset) -> Self {
        Self {
            elapsed_ms: 0.0,
            ruleset,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Restart the cadence from zero (ids keep counting up)
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Accumulate `step_ms` and fire one batch per completed period.
    ///
    /// Nothing spawns while the session is over, and the partially elapsed
    /// period is dropped so a restart begins a fresh one.
    pub fn tick(&mut self, step_ms: f64, running: bool, score: u64, field_width: f32) -> Vec<Entity> {
        if !running {
            self.reset();
            return Vec::new();
        }

        self.elapsed_ms += step_ms;
        let mut spawned = Vec::new();
        while self.elapsed_ms >= SPAWN_PERIOD_MS {
            self.elapsed_ms -= SPAWN_PERIOD_MS;
            spawned.extend(self.fire(score, field_width));
        }
        spawned
    }

    /// Spawn exactly one period's worth of entities
    pub fn fire(&mut self, score: u64, field_width: f32) -> Vec<Entity> {
        let count = self.ruleset.spawns_for_score(score);
        (0..count).map(|_| self.spawn_one(field_width)).collect()
    }

    fn spawn_one(&mut self, field_width: f32) -> Entity {
        let roll: f32 = self.rng.random();
        let kind = self.ruleset.kind_for_roll(roll);
        let x0 = self.rng.random::<f32>() * (field_width - ENTITY_SIZE);

        let id = self.next_id;
        self.next_id += 1;

        let entity = Entity::new(id, kind, x0, field_width);
        log::debug!("Spawned {:?} #{} at x={:.1}", kind, id, entity.pos.x);
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_distribution_bands() {
        assert_eq!(kind_for_roll(0.0), EntityKind::Hazard);
        assert_eq!(kind_for_roll(0.0999), EntityKind::Hazard);
        assert_eq!(kind_for_roll(0.10), EntityKind::Heal);
        assert_eq!(kind_for_roll(0.1499), EntityKind::Heal);
        assert_eq!(kind_for_roll(0.15), EntityKind::Normal);
        assert_eq!(kind_for_roll(0.9999), EntityKind::Normal);
    }

    #[test]
    fn test_spawns_for_score_thresholds() {
        assert_eq!(spawns_for_score(0), 1);
        assert_eq!(spawns_for_score(9), 1);
        assert_eq!(spawns_for_score(10), 2);
        assert_eq!(spawns_for_score(25), 2);
        assert_eq!(spawns_for_score(29), 2);
        assert_eq!(spawns_for_score(30), 3);
        assert_eq!(spawns_for_score(1000), 3);
    }

    #[test]
    fn test_tick_fires_once_per_period() {
        let mut spawner = Spawner::new(7, Ruleset::Classic);
        let mut total = 0;
        for _ in 0..49 {
            total += spawner.tick(20.0, true, 0, 400.0).len();
        }
        assert_eq!(total, 0);
        assert_eq!(spawner.tick(20.0, true, 0, 400.0).len(), 1);
    }

    #[test]
    fn test_score_25_spawns_two() {
        let mut spawner = Spawner::new(7, Ruleset::Classic);
        let batch = spawner.tick(SPAWN_PERIOD_MS, true, 25, 400.0);
        assert_eq!(batch.len(), 2);
        assert_ne!(batch[0].id, batch[1].id);
    }

    #[test]
    fn test_not_running_spawns_nothing_and_resets() {
        let mut spawner = Spawner::new(7, Ruleset::Classic);
        spawner.tick(900.0, true, 0, 400.0);
        assert!(spawner.tick(900.0, false, 0, 400.0).is_empty());
        assert_eq!(spawner.elapsed_ms, 0.0);
        assert!(spawner.tick(500.0, true, 0, 400.0).is_empty());
    }

    #[test]
    fn test_spawns_fit_the_field() {
        let mut spawner = Spawner::new(99, Ruleset::Classic);
        for _ in 0..200 {
            for e in spawner.fire(50, 400.0) {
                assert!(e.pos.x >= 0.0 && e.right() <= 400.0);
                assert_eq!(e.pos.y, 0.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = Spawner::new(1234, Ruleset::Classic);
        let mut b = Spawner::new(1234, Ruleset::Classic);
        for _ in 0..20 {
            let ea = a.fire(35, 400.0);
            let eb = b.fire(35, 400.0);
            for (x, y) in ea.iter().zip(&eb) {
                assert_eq!(x.kind, y.kind);
                assert_eq!(x.pos, y.pos);
            }
        }
    }

    #[test]
    fn test_simple_ruleset_only_normals() {
        let mut spawner = Spawner::new(5, Ruleset::Simple);
        for _ in 0..100 {
            let batch = spawner.fire(100, 400.0);
            assert_eq!(batch.len(), 1);
            assert_eq!(batch[0].kind, EntityKind::Normal);
        }
    }
}
