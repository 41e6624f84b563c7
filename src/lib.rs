//! Catch Ball - A falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawner, session, tick)
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Player-facing configuration
//! - `tuning`: Rulesets and game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Ruleset;

/// Game configuration constants
pub mod consts {
    /// Fixed advance step in milliseconds (one entity fall step)
    pub const STEP_MS: f64 = 20.0;
    /// Maximum steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play area, replaced by the real element size at startup
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Basket defaults
    pub const BASKET_WIDTH: f32 = 100.0;
    pub const BASKET_HEIGHT: f32 = 30.0;
    /// Gap between basket bottom and field bottom
    pub const BASKET_BOTTOM_MARGIN: f32 = 10.0;
    /// Keyboard nudge distance
    pub const BASKET_NUDGE: f32 = 20.0;

    /// Falling entities are square
    pub const ENTITY_SIZE: f32 = 40.0;
    /// Base fall speed (units per step)
    pub const BASE_FALL_SPEED: u32 = 5;
    /// Score needed for each extra unit of fall speed
    pub const SCORE_PER_SPEED_UP: u64 = 10;

    /// Lives at session start
    pub const START_LIVES: u8 = 3;
    /// Heals never push lives above this
    pub const MAX_LIVES: u8 = 5;

    /// How long a catch/miss flash should stay visible
    pub const FLASH_MS: u32 = 300;
}

/// Clamp `value` into `[0, span]`.
///
/// A negative or non-finite span collapses the range to `[0, 0]`, and a
/// non-finite value lands on 0, so degenerate geometry never yields NaN or
/// negative positions.
#[inline]
pub fn clamp_span(value: f32, span: f32) -> f32 {
    let max = if span.is_finite() { span.max(0.0) } else { 0.0 };
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
