//! Game world: everything one run of the simulation owns

use super::entity::Entity;
use super::events::{GameEvent, PresentationSink};
use super::geometry::{FieldBounds, Playfield};
use super::session::{GamePhase, Session};
use super::spawner::Spawner;
use crate::tuning::Ruleset;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub ruleset: Ruleset,
    pub session: Session,
    pub playfield: Playfield,
    /// Live entities, ordered by id. Resolved entities are removed the same
    /// step they resolve.
    pub entities: Vec<Entity>,
    pub spawner: Spawner,
    /// Simulation step counter
    pub time_ticks: u64,
    /// Notifications not yet handed to the presentation sink
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Create a new world with the given seed and the default field
    pub fn new(seed: u64, ruleset: Ruleset) -> Self {
        Self::with_field(seed, ruleset, FieldBounds::default())
    }

    pub fn with_field(seed: u64, ruleset: Ruleset, field: FieldBounds) -> Self {
        Self {
            seed,
            ruleset,
            session: Session::new(),
            playfield: Playfield::new(field),
            entities: Vec::new(),
            spawner: Spawner::new(seed, ruleset),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    /// Number of entities still falling
    #[inline]
    pub fn live_count(&self) -> usize {
        self.entities.len()
    }

    /// Add freshly spawned entities to the arena
    pub fn insert_entities(&mut self, spawned: Vec<Entity>) {
        self.entities.extend(spawned);
        self.entities.sort_by_key(|e| e.id);
    }

    /// Drop every in-flight entity (game over or restart)
    pub fn clear_entities(&mut self) {
        if !self.entities.is_empty() {
            log::debug!("Discarding {} in-flight entities", self.entities.len());
        }
        self.entities.clear();
    }

    /// Reset score, lives, basket and arena for a new run
    pub fn restart(&mut self) {
        self.clear_entities();
        self.spawner.reset();
        let field_width = self.playfield.field.width;
        self.playfield.basket.recenter(field_width);
        self.session.restart(&mut self.events);
        log::info!("Game restarted (seed {})", self.seed);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand all pending notifications to `sink`, oldest first
    pub fn dispatch_events(&mut self, sink: &mut dyn PresentationSink) {
        for event in self.drain_events() {
            event.dispatch(sink);
        }
    }
}
