//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` = 1/60 s, driven by the host clock)
//! - Seeded RNG only
//! - Single-threaded, no blocking, no re-entrancy
//! - No rendering, audio or platform dependencies; the boundary is commands
//!   in, queries and [`AudioEvent`]s out

pub mod collision;
pub mod group;
pub mod ship;
pub mod spawner;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{group_collide, group_group_collide};
pub use group::SpriteGroup;
pub use ship::Ship;
pub use spawner::spawn_rock;
pub use sprite::{ShapeProfile, Sprite};
pub use state::{AudioEvent, GameState};
pub use tick::tick;
