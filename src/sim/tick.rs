//! Fixed timestep simulation tick
//!
//! One call advances the world by `STEP_MS`: every live entity falls one
//! step, and the spawner's cadence moves forward by the same amount.

use super::entity::EntityKind;
use super::geometry::{GeometryProvider, Nudge};
use super::state::World;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keyboard nudge
    pub nudge: Option<Nudge>,
    /// Absolute pointer/touch x in field space
    pub pointer_x: Option<f32>,
    /// Restart button
    pub restart: bool,
    /// Demo mode - the basket steers itself
    pub autopilot: bool,
}

/// Advance the world by one fixed step
pub fn tick(world: &mut World, input: &TickInput) {
    if input.restart {
        world.restart();
    }

    // Nothing moves once the session is over
    if !world.session.is_running() {
        world.spawner.tick(STEP_MS, false, world.session.score, world.playfield.field.width);
        return;
    }

    world.time_ticks += 1;

    let field_width = world.playfield.field.width;
    if input.autopilot {
        if let Some(target) = autopilot_target(world) {
            world.playfield.basket.center_on(target, field_width);
        }
    } else {
        if let Some(x) = input.pointer_x {
            world.playfield.basket.center_on(x, field_width);
        }
        if let Some(dir) = input.nudge {
            world.playfield.basket.nudge(dir, field_width);
        }
    }

    advance_entities(world);

    // Spawn after advancing so new entities first move next step
    let running = world.session.is_running();
    let spawned = world
        .spawner
        .tick(STEP_MS, running, world.session.score, world.playfield.field.width);
    world.insert_entities(spawned);
}

/// One pass over the arena: advance, report, and retire resolved entities.
///
/// If an outcome ends the session, the rest of the arena is discarded in
/// the same pass and nothing else is advanced.
fn advance_entities(world: &mut World) {
    let speed = world.ruleset.fall_speed(world.session.score);
    let mut entities = std::mem::take(&mut world.entities);
    let mut game_over = false;

    for entity in entities.iter_mut() {
        let basket = world.playfield.basket_bounds();
        let field = world.playfield.field_bounds();
        let outcome = entity.advance_by(speed, &basket, &field);
        if outcome.is_resolved() {
            let kind = entity.kind;
            if world.session.apply_outcome(kind, outcome, &mut world.events) {
                game_over = true;
                break;
            }
        }
    }

    if game_over {
        world.entities = entities;
        world.clear_entities();
        world.spawner.reset();
        return;
    }

    entities.retain(|e| e.active);
    world.entities = entities;
}

/// Where the demo basket should center: under the lowest ball or heart,
/// or back to the middle when only bombs are falling
fn autopilot_target(world: &World) -> Option<f32> {
    let lowest = world
        .entities
        .iter()
        .filter(|e| e.kind != EntityKind::Hazard)
        .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(std::cmp::Ordering::Equal));

    match lowest {
        Some(e) => Some(e.pos.x + e.size / 2.0),
        None if world.entities.is_empty() => None,
        None => Some(world.playfield.field.width / 2.0),
    }
}
