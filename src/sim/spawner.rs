//! Time-gated rock spawner
//!
//! Invoked from the tick whenever the spawn timer fires. Placement
//! rejection-samples for a candidate clear of the ship, so a rock can never
//! materialize on top of the player; when no clear candidate turns up the
//! spawn is skipped until the next interval. Rock speed scales with score;
//! tumble rate does not.

use glam::Vec2;
use rand::Rng;

use super::sprite::{ShapeProfile, Sprite};
use super::state::GameState;
use crate::consts::*;
use crate::distance;

/// Rejection-sampling attempts before a spawn is given up for this interval.
/// On any field that passes [`FieldConfig`](crate::FieldConfig) validation the
/// clear region is large and a handful of draws suffice; the bound only
/// matters for hand-built configs where the ship dominates the field.
const PLACEMENT_ATTEMPTS: u32 = 100;

/// Try to spawn one rock. Silently does nothing while idle, at the population
/// cap, or when no clear position turns up.
pub fn spawn_rock(state: &mut GameState) {
    if !state.started || state.rocks.len() >= state.config.max_rocks {
        return;
    }

    let ship_center = state.ship.center();
    let mut pos = None;
    for _ in 0..PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            state.rng.random_range(0.0..state.config.field_width),
            state.rng.random_range(0.0..state.config.field_height),
        );
        if distance(candidate, ship_center) > SAFE_SPAWN_DISTANCE {
            pos = Some(candidate);
            break;
        }
    }
    let Some(pos) = pos else {
        log::debug!("no clear spawn position found, skipping");
        return;
    };

    // Difficulty: the base velocity range [-1, 2) widens on both bounds as
    // the score climbs.
    let increase = state.score as f32 / 100.0;
    let vel = Vec2::new(
        state.rng.random_range(-(1.0 + increase)..2.0 + increase),
        state.rng.random_range(-(1.0 + increase)..2.0 + increase),
    );
    let angle_vel = state
        .rng
        .random_range(ROCK_ANGLE_VEL_MIN..ROCK_ANGLE_VEL_MAX);

    let rock = Sprite::new(pos, vel, 0.0, angle_vel, &ShapeProfile::ROCK, &mut state.events);
    let id = state.rocks.insert(rock);
    log::debug!(
        "rock {id} spawned at ({:.0}, {:.0}) vel ({:.2}, {:.2})",
        pos.x,
        pos.y,
        vel.x,
        vel.y
    );
}
