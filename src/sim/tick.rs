//! Fixed timestep simulation tick
//!
//! One call advances the whole game by one step (nominally 1/60 s). Order
//! within the tick: ship kinematics, entity groups, spawner, ship-vs-rock
//! collision, missile-vs-rock collision. Explosion effects animate even while
//! idle so bursts keep playing out over the game-over splash.

use super::collision::{group_collide, group_group_collide};
use super::spawner::spawn_rock;
use super::state::GameState;

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState) {
    let field_width = state.config.field_width;
    let field_height = state.config.field_height;

    // Effects always advance; exhausted ones are swept here so drawing can
    // never overrun their frame sequence.
    state.explosions.update_all(field_width, field_height);

    if !state.started {
        return;
    }

    state.ship.update(field_width, field_height);
    state.rocks.update_all(field_width, field_height);
    state.missiles.update_all(field_width, field_height);

    // Spawn timer. The counter wraps once it exceeds the field width; the
    // odd wrap point is long-standing observable behavior.
    if state.elapsed_ticks <= field_width as u32 {
        state.elapsed_ticks += 1;
        if state.elapsed_ticks % state.config.spawn_interval == 0 {
            spawn_rock(state);
        }
    } else {
        state.elapsed_ticks = 0;
    }

    // Ship vs rocks: any number of simultaneous hits costs one life. Losing
    // the last life ends the session immediately; there is no game-over
    // freeze frame.
    let ship_center = state.ship.center();
    let ship_radius = state.ship.radius;
    let hits = group_collide(
        &mut state.rocks,
        ship_center,
        ship_radius,
        &mut state.explosions,
        &mut state.events,
    );
    if hits > 0 {
        if state.lives > 1 {
            state.lives -= 1;
            log::debug!("hit: {} lives left", state.lives);
        } else {
            state.lives = 0;
            state.started = false;
            log::info!("game over, final score {}", state.score);
        }
    }

    // Missiles vs rocks: score per destroyed rock.
    let destroyed = group_group_collide(
        &mut state.missiles,
        &mut state.rocks,
        &mut state.explosions,
        &mut state.events,
    );
    if destroyed > 0 {
        state.score += destroyed as u64 * state.config.score_per_kill;
    }
}
