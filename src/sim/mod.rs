//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{check_ship_contact, intersects, sweep_projectiles};
pub use spawn::{expire_projectiles, fire_projectile, populate_field, purge};
pub use state::{
    Asteroid, Body, Mobile, Playfield, Projectile, Ship, SimEvent, SizeTier, World,
};
pub use tick::{ControlInput, Periodic, Schedule, tick};
