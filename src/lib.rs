//! Astro Drift - wrap-around field asteroids
//!
//! This crate is the simulation core only:
//! - `sim`: deterministic fixed-timestep gameplay (ship, rocks, missiles,
//!   collisions, session state)
//! - `config`: startup configuration
//!
//! Rendering, asset loading, audio playback and input-device mapping are
//! external collaborators. The host feeds commands in (`turn_left`, `fire`,
//! `start_game`, ...), calls `tick` at a fixed 60 Hz, polls positions and
//! session counters for drawing, and drains `AudioEvent`s for playback.

pub mod config;
pub mod sim;

pub use config::FieldConfig;

use glam::Vec2;

/// Gameplay constants
///
/// These are behavioral, not cosmetic: collision radii, kinematics and
/// lifespans all feed the simulation. Field-level knobs (dimensions, spawn
/// cadence, lives) live in [`config::FieldConfig`] instead.
pub mod consts {
    /// Ship acceleration while thrusting (units/tick²)
    pub const SHIP_ACC: f32 = 0.5;
    /// Per-tick friction factor applied to ship velocity, thrusting or not
    pub const SHIP_FRICTION: f32 = SHIP_ACC / 20.0;
    /// Turn rate applied on left/right input (degrees/tick)
    pub const SHIP_TURN_RATE: f32 = 4.5;
    /// Ship collision radius
    pub const SHIP_RADIUS: f32 = 45.0;

    /// Speed added to a missile along the ship's forward vector (units/tick)
    pub const MISSILE_SPEED: f32 = 6.0;
    /// Missile spawn offset from the ship anchor (units)
    pub const MISSILE_OFFSET: f32 = 40.0;
    pub const MISSILE_RADIUS: f32 = 5.0;
    /// Missiles expire after this many ticks
    pub const MISSILE_LIFESPAN: u32 = 50;

    /// Rock collision radius
    pub const ROCK_RADIUS: f32 = 45.0;
    /// Rock angular velocity range (degrees/tick), independent of difficulty
    pub const ROCK_ANGLE_VEL_MIN: f32 = -1.0;
    pub const ROCK_ANGLE_VEL_MAX: f32 = 5.0;

    pub const EXPLOSION_RADIUS: f32 = 64.0;
    /// Explosion frame count; the effect is swept once its age reaches this
    pub const EXPLOSION_LIFESPAN: u32 = 7;

    /// Minimum clearance between a rock spawn position and the ship center
    pub const SAFE_SPAWN_DISTANCE: f32 = ROCK_RADIUS + 2.0 * SHIP_RADIUS;
}

/// Convert a heading in radians to a unit forward vector.
///
/// Screen space is y-down, so a positive angle turns counter-clockwise on
/// screen: `(cos θ, -sin θ)`. The ship's thrust direction uses the same
/// convention.
#[inline]
pub fn angle_to_vector(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), -radians.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Wrap a coordinate into `[0, limit)` (toroidal field topology)
#[inline]
pub fn wrap(value: f32, limit: f32) -> f32 {
    let wrapped = value.rem_euclid(limit);
    // rem_euclid rounds up to `limit` itself for tiny negative inputs
    if wrapped >= limit { 0.0 } else { wrapped }
}
