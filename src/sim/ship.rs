//! Player ship
//!
//! The ship is a singleton owned by `GameState`. Its identity persists across
//! session resets: a restart resets score, lives and the entity groups but
//! deliberately leaves the ship where it was, moving as it was.

use glam::Vec2;

use super::sprite::{ShapeProfile, Sprite};
use super::state::AudioEvent;
use crate::consts::*;
use crate::{angle_to_vector, wrap};

#[derive(Debug, Clone)]
pub struct Ship {
    /// Anchor position (top-left style); center = `pos + radius`
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees
    pub angle: f32,
    /// Degrees per tick
    pub angle_vel: f32,
    pub radius: f32,
    pub thrust: bool,
    /// Unit forward vector, derived from `angle` each tick
    pub forward: Vec2,
}

impl Ship {
    /// Place the ship with its center at `center`, at rest, heading right.
    pub fn new(center: Vec2) -> Self {
        Self {
            pos: center - Vec2::splat(SHIP_RADIUS),
            vel: Vec2::ZERO,
            angle: 0.0,
            angle_vel: 0.0,
            radius: SHIP_RADIUS,
            thrust: false,
            forward: angle_to_vector(0.0),
        }
    }

    pub fn set_angle_vel(&mut self, angle_vel: f32) {
        self.angle_vel = angle_vel;
    }

    /// Toggle thrust. Queues the looping-cue trigger for the host; actual
    /// playback is external.
    pub fn set_thrust(&mut self, thrust: bool, events: &mut Vec<AudioEvent>) {
        self.thrust = thrust;
        events.push(if thrust {
            AudioEvent::ThrustStart
        } else {
            AudioEvent::ThrustStop
        });
    }

    /// Build a missile spawn request. No cooldown and no ammo limit: every
    /// call yields a missile.
    ///
    /// Spawn position is the ship anchor offset by the fixed muzzle distance
    /// plus the ship radius along `forward`; spawn velocity inherits the
    /// ship's velocity with a forward boost.
    pub fn shoot(&self, events: &mut Vec<AudioEvent>) -> Sprite {
        let pos = self.pos + Vec2::splat(MISSILE_OFFSET) + self.forward * self.radius;
        let vel = self.vel + self.forward * MISSILE_SPEED;
        Sprite::new(pos, vel, self.angle, 0.0, &ShapeProfile::MISSILE, events)
    }

    /// Advance one tick.
    ///
    /// Friction applies whether or not the ship is thrusting. The wrap limit
    /// is `dimension - radius` per axis, unlike sprites which wrap against the
    /// full dimension; the asymmetry is intentional, observable behavior.
    pub fn update(&mut self, field_width: f32, field_height: f32) {
        self.angle += self.angle_vel;
        self.forward = angle_to_vector(self.angle.to_radians());
        if self.thrust {
            self.vel += self.forward * SHIP_ACC;
        }
        self.vel *= 1.0 - SHIP_FRICTION;
        self.pos.x = wrap(self.pos.x + self.vel.x, field_width - self.radius);
        self.pos.y = wrap(self.pos.y + self.vel.y, field_height - self.radius);
    }

    /// Center position used for collision tests and spawn-safety checks
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}
