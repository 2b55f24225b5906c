//! Generic sprite entity
//!
//! Rocks, missiles and explosion effects share one kinematic contract:
//! position, velocity, heading, a fixed collision radius, and an age against
//! an optional lifespan. The ship is the one entity that does not fit this
//! mold (see `ship.rs`).

use glam::Vec2;

use super::state::AudioEvent;
use crate::consts::*;
use crate::{distance, wrap};

/// Fixed shape data a sprite is constructed from
#[derive(Debug, Clone, Copy)]
pub struct ShapeProfile {
    /// Collision radius, always positive
    pub radius: f32,
    /// `None` = immortal; removal only ever happens through collision
    pub lifespan: Option<u32>,
    /// Frame-animated (effects index their frame sequence by age)
    pub animated: bool,
    /// One-shot audio trigger queued at construction
    pub sound: Option<AudioEvent>,
}

impl ShapeProfile {
    pub const ROCK: Self = Self {
        radius: ROCK_RADIUS,
        lifespan: None,
        animated: false,
        sound: None,
    };

    pub const MISSILE: Self = Self {
        radius: MISSILE_RADIUS,
        lifespan: Some(MISSILE_LIFESPAN),
        animated: false,
        sound: Some(AudioEvent::Fire),
    };

    pub const EXPLOSION: Self = Self {
        radius: EXPLOSION_RADIUS,
        lifespan: Some(EXPLOSION_LIFESPAN),
        animated: true,
        sound: Some(AudioEvent::Explosion),
    };
}

/// A rock, missile or explosion effect
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Registry identity, assigned on insertion into a `SpriteGroup`
    pub id: u32,
    /// Center position, wrapped into the field
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees
    pub angle: f32,
    /// Degrees per tick
    pub angle_vel: f32,
    pub radius: f32,
    /// Ticks since construction
    pub age: u32,
    pub lifespan: Option<u32>,
    pub animated: bool,
}

impl Sprite {
    /// Construct a sprite from a spawn position and a shape profile.
    ///
    /// The stored center is the spawn position offset by the profile radius on
    /// each axis. The profile's one-shot sound, if any, is queued immediately.
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        angle: f32,
        angle_vel: f32,
        profile: &ShapeProfile,
        events: &mut Vec<AudioEvent>,
    ) -> Self {
        if let Some(sound) = profile.sound {
            events.push(sound);
        }
        Self {
            id: 0,
            pos: pos + Vec2::splat(profile.radius),
            vel,
            angle,
            angle_vel,
            radius: profile.radius,
            age: 0,
            lifespan: profile.lifespan,
            animated: profile.animated,
        }
    }

    /// Advance one tick: integrate heading and position (full-dimension
    /// toroidal wrap) and age. Returns `true` when a finite lifespan has been
    /// reached and the caller should remove this sprite.
    pub fn update(&mut self, field_width: f32, field_height: f32) -> bool {
        self.angle += self.angle_vel;
        self.pos.x = wrap(self.pos.x + self.vel.x, field_width);
        self.pos.y = wrap(self.pos.y + self.vel.y, field_height);
        self.age += 1;
        match self.lifespan {
            Some(lifespan) => self.age >= lifespan,
            None => false,
        }
    }

    /// Circle-overlap test against another center/radius. Pure and symmetric.
    pub fn collide(&self, center: Vec2, radius: f32) -> bool {
        distance(self.pos, center) <= self.radius + radius
    }

    /// Animation frame for the renderer, `None` once the sequence is
    /// exhausted. Never indexes past the frame count.
    pub fn frame(&self) -> Option<u32> {
        if !self.animated {
            return None;
        }
        match self.lifespan {
            Some(lifespan) if self.age < lifespan => Some(self.age),
            _ => None,
        }
    }
}
