//! Falling entities
//!
//! Each entity falls straight down from a fixed x until it lands in the
//! basket or drops past the bottom of the field. It resolves exactly once.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{BasketBounds, FieldBounds};
use crate::clamp_span;
use crate::consts::*;

/// Entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ball: +1 score when caught, -1 life when missed
    Normal,
    /// Bomb: -1 life when caught, harmless when missed
    Hazard,
    /// Heart: +1 life (capped) when caught, nothing when missed
    Heal,
}

/// Result of one advance step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Falling,
    Caught,
    MissedBottom,
}

impl Outcome {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        *self != Outcome::Falling
    }
}

/// Fall speed in units per step: 5 plus 1 for every 10 points of session score
#[inline]
pub fn fall_speed(score: u64) -> u32 {
    let bonus = (score / SCORE_PER_SPEED_UP).min(u64::from(u32::MAX - BASE_FALL_SPEED));
    BASE_FALL_SPEED + bonus as u32
}

/// A falling entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner; x never changes after spawn
    pub pos: Vec2,
    pub size: f32,
    pub active: bool,
    /// How this entity resolved (Falling while active)
    pub outcome: Outcome,
}

impl Entity {
    /// Spawn at the top of the field, x clamped so the entity fits
    pub fn new(id: u32, kind: EntityKind, x0: f32, field_width: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(clamp_span(x0, field_width - ENTITY_SIZE), 0.0),
            size: ENTITY_SIZE,
            active: true,
            outcome: Outcome::Falling,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// True when the entity has reached the basket top and sits fully inside
    /// its opening. Closed intervals: flush with either edge still counts,
    /// sticking out past either edge does not.
    pub fn is_contained_by(&self, basket: &BasketBounds) -> bool {
        self.bottom() >= basket.top && self.left() >= basket.left && self.right() <= basket.right
    }

    /// Advance one step at the speed implied by the session score
    pub fn advance(&mut self, score: u64, basket: &BasketBounds, field: &FieldBounds) -> Outcome {
        self.advance_by(fall_speed(score), basket, field)
    }

    /// Advance one step by `speed` units, then test basket and field bottom.
    ///
    /// A resolved entity is inert: it no longer moves and keeps reporting the
    /// outcome it resolved with.
    pub fn advance_by(&mut self, speed: u32, basket: &BasketBounds, field: &FieldBounds) -> Outcome {
        if !self.active {
            return self.outcome;
        }

        self.pos.y += speed as f32;

        let outcome = if self.is_contained_by(basket) {
            Outcome::Caught
        } else if self.pos.y > field.height {
            Outcome::MissedBottom
        } else {
            Outcome::Falling
        };

        if outcome.is_resolved() {
            self.active = false;
            self.outcome = outcome;
        }
        outcome
    }
}
