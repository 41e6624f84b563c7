//! Playfield geometry: field bounds, the basket, and the provider seam
//!
//! Coordinates are in field space: x grows right from the left wall, y grows
//! down from the top edge where entities spawn.

use serde::{Deserialize, Serialize};

use crate::clamp_span;
use crate::consts::*;

/// Size of the play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

/// The catching opening of the basket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasketBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
}

/// Answers "where is the basket" and "how big is the field" on demand
pub trait GeometryProvider {
    fn basket_bounds(&self) -> BasketBounds;
    fn field_bounds(&self) -> FieldBounds;
}

/// Horizontal nudge direction (keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Left,
    Right,
}

/// The player's basket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Left edge, always within [0, field_width - width]
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: 0.0,
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    /// Largest left edge that keeps the basket inside the field
    #[inline]
    pub fn max_x(&self, field_width: f32) -> f32 {
        field_width - self.width
    }

    /// Move to the requested left edge, clamped to the field
    pub fn set_x(&mut self, x: f32, field_width: f32) {
        self.x = clamp_span(x, self.max_x(field_width));
    }

    /// Shift by one keyboard step
    pub fn nudge(&mut self, dir: Nudge, field_width: f32) {
        let delta = match dir {
            Nudge::Left => -BASKET_NUDGE,
            Nudge::Right => BASKET_NUDGE,
        };
        self.set_x(self.x + delta, field_width);
    }

    /// Center the basket under an absolute pointer position
    pub fn center_on(&mut self, pointer_x: f32, field_width: f32) {
        self.set_x(pointer_x - self.width / 2.0, field_width);
    }

    /// Put the basket back in the middle of the field
    pub fn recenter(&mut self, field_width: f32) {
        self.set_x(field_width / 2.0 - self.width / 2.0, field_width);
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Field plus basket: the geometry every entity advance queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    pub field: FieldBounds,
    pub basket: Basket,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(FieldBounds::default())
    }
}

impl Playfield {
    pub fn new(field: FieldBounds) -> Self {
        let mut playfield = Self {
            field,
            basket: Basket::default(),
        };
        playfield.basket.recenter(field.width);
        playfield
    }

    /// Adopt a new field size (element resize), keeping the basket inside
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = FieldBounds {
            width: width.max(0.0),
            height: height.max(0.0),
        };
        let x = self.basket.x;
        self.basket.set_x(x, self.field.width);
    }

    /// Top edge of the basket; it rests a small margin above the field bottom
    pub fn basket_top(&self) -> f32 {
        (self.field.height - BASKET_BOTTOM_MARGIN - self.basket.height).max(0.0)
    }
}

impl GeometryProvider for Playfield {
    fn basket_bounds(&self) -> BasketBounds {
        BasketBounds {
            left: self.basket.x,
            right: self.basket.x + self.basket.width,
            top: self.basket_top(),
        }
    }

    fn field_bounds(&self) -> FieldBounds {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_starts_centered() {
        let playfield = Playfield::default();
        assert_eq!(playfield.basket.x, FIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0);
        assert_eq!(playfield.basket.center_x(), FIELD_WIDTH / 2.0);
    }

    #[test]
    fn test_nudge_clamps_at_walls() {
        let mut basket = Basket::default();
        basket.set_x(10.0, 400.0);
        basket.nudge(Nudge::Left, 400.0);
        assert_eq!(basket.x, 0.0);

        basket.set_x(290.0, 400.0);
        basket.nudge(Nudge::Right, 400.0);
        assert_eq!(basket.x, 300.0);
        basket.nudge(Nudge::Right, 400.0);
        assert_eq!(basket.x, 300.0);
    }

    #[test]
    fn test_center_on_pointer() {
        let mut basket = Basket::default();
        basket.center_on(200.0, 400.0);
        assert_eq!(basket.x, 150.0);
        basket.center_on(-50.0, 400.0);
        assert_eq!(basket.x, 0.0);
        basket.center_on(10_000.0, 400.0);
        assert_eq!(basket.x, 300.0);
    }

    #[test]
    fn test_degenerate_field_pins_basket_to_zero() {
        let mut playfield = Playfield::new(FieldBounds {
            width: 0.0,
            height: 0.0,
        });
        assert_eq!(playfield.basket.x, 0.0);
        playfield.basket.center_on(123.0, playfield.field.width);
        assert_eq!(playfield.basket.x, 0.0);
        assert_eq!(playfield.basket_top(), 0.0);
    }

    #[test]
    fn test_resize_keeps_basket_inside() {
        let mut playfield = Playfield::default();
        playfield.basket.set_x(300.0, 400.0);
        playfield.resize(250.0, 500.0);
        assert_eq!(playfield.basket.x, 150.0);
        assert_eq!(playfield.field_bounds().height, 500.0);
    }

    #[test]
    fn test_basket_bounds() {
        let playfield = Playfield::default();
        let bounds = playfield.basket_bounds();
        assert_eq!(bounds.right - bounds.left, BASKET_WIDTH);
        assert_eq!(bounds.top, FIELD_HEIGHT - BASKET_BOTTOM_MARGIN - BASKET_HEIGHT);
    }
}
