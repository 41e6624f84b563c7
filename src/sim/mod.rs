//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod entity;
pub mod events;
pub mod geometry;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use entity::{Entity, EntityKind, Outcome, fall_speed};
pub use events::{GameEvent, PresentationSink};
pub use geometry::{Basket, BasketBounds, FieldBounds, GeometryProvider, Nudge, Playfield};
pub use session::{GamePhase, Session};
pub use spawner::{
    HAZARD_CHANCE, HEAL_CHANCE, SECOND_SPAWN_SCORE, SPAWN_PERIOD_MS, Spawner, THIRD_SPAWN_SCORE,
    kind_for_roll, spawns_for_score,
};
pub use state::World;
pub use tick::{TickInput, tick};
