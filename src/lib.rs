//! Wraproids - a toroidal-playfield asteroids simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, lifecycle)
//! - `governor`: Frame-rate governor for the render cadence
//! - `config`: Validated runtime configuration
//! - `render`: Render sink boundary (read-only frame snapshots)
//! - `telemetry`: Telemetry sink boundary (slow-cadence HUD data)

pub mod config;
pub mod governor;
pub mod render;
pub mod sim;
pub mod telemetry;

pub use config::{ConfigError, SimConfig};
pub use governor::FrameGovernor;

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Base tick rate (100 Hz, one tick per 10 ms)
    pub const TICK_HZ: u32 = 100;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Wrap tolerance past the high edge before relocating to 0
    pub const WRAP_EXIT_MARGIN: f32 = 20.0;
    /// Wrap tolerance below 0 before relocating to the far edge
    /// (larger so sprites fully leave the field before reappearing)
    pub const WRAP_ENTRY_MARGIN: f32 = 150.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 25.0;
    pub const SHIP_MAX_SPEED: f32 = 10.0;
    pub const SHIP_ACCELERATION: f32 = 2.0;
    /// Passive speed decay per deceleration tick
    pub const SHIP_DECELERATION: f32 = 2.0;
    /// Heading change per rotate intent, degrees
    pub const SHIP_ROTATION_STEP: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Muzzle speed, units per tick, independent of ship speed
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Projectile lifetime in ticks (1 second)
    pub const PROJECTILE_TTL_TICKS: u64 = TICK_HZ as u64;

    /// Asteroid drift speed bound, units per tick per axis
    pub const ASTEROID_MAX_DRIFT: f32 = 2.5;
    /// Initial population bounds, inclusive-exclusive
    pub const FIELD_MIN: u32 = 5;
    pub const FIELD_MAX: u32 = 20;

    /// Default task cadences, in base ticks
    pub const MOTION_EVERY: u32 = 1;
    pub const COLLISION_EVERY: u32 = 5;
    pub const SHIP_CHECK_EVERY: u32 = 10;
    pub const PURGE_EVERY: u32 = 10;
    pub const DECEL_EVERY: u32 = 50;
    pub const TELEMETRY_EVERY: u32 = 50;

    /// Frame governor cap, frames per second
    pub const FPS_CAP: u32 = 60;
}

/// Unit vector for a heading in degrees.
///
/// Headings follow the original sprite convention: 0° points "up" the
/// playfield and positive rotation is clockwise, so the components are
/// `(-sin θ, cos θ)`.
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let theta = heading_deg.to_radians();
    Vec2::new(-theta.sin(), theta.cos())
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}
