//! Runtime simulation configuration
//!
//! All tuning values fixed at session start. `SimConfig` deserializes with
//! per-field defaults so a partial JSON file can override just the values
//! you care about; `src/lib.rs` `consts` remains the authoritative default
//! source.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;

/// Configuration rejected at startup, or a config file that failed to load.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("playfield {axis} must be positive, got {value}")]
    NonPositiveDimension { axis: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositiveTuning { name: &'static str, value: f32 },

    #[error("task '{task}' interval must be nonzero ticks")]
    ZeroInterval { task: &'static str },

    #[error("initial population range [{min}, {max}) is empty")]
    EmptyPopulationRange { min: u32, max: u32 },

    #[error("projectile TTL must be nonzero ticks")]
    ZeroTtl,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation configuration, fixed for the lifetime of a session.
///
/// No runtime reconfiguration: validate once, then hand to [`crate::sim::World`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Ship ===
    pub max_speed: f32,
    pub acceleration: f32,
    /// Passive speed decay applied on each deceleration tick
    pub deceleration: f32,
    /// Degrees per rotate intent
    pub rotation_step: f32,

    // === Projectiles ===
    pub fire_speed: f32,
    pub projectile_ttl_ticks: u64,

    // === Asteroids ===
    /// Per-axis drift bound, units per tick
    pub asteroid_max_drift: f32,
    /// Initial population count range, inclusive-exclusive
    pub field_min: u32,
    pub field_max: u32,

    // === Task cadences, in base ticks ===
    pub motion_every: u32,
    pub collision_every: u32,
    pub ship_check_every: u32,
    pub purge_every: u32,
    pub decel_every: u32,
    pub telemetry_every: u32,

    // === Rendering ===
    /// Frame governor cap, frames per second
    pub fps_cap: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            max_speed: SHIP_MAX_SPEED,
            acceleration: SHIP_ACCELERATION,
            deceleration: SHIP_DECELERATION,
            rotation_step: SHIP_ROTATION_STEP,
            fire_speed: PROJECTILE_SPEED,
            projectile_ttl_ticks: PROJECTILE_TTL_TICKS,
            asteroid_max_drift: ASTEROID_MAX_DRIFT,
            field_min: FIELD_MIN,
            field_max: FIELD_MAX,
            motion_every: MOTION_EVERY,
            collision_every: COLLISION_EVERY,
            ship_check_every: SHIP_CHECK_EVERY,
            purge_every: PURGE_EVERY,
            decel_every: DECEL_EVERY,
            telemetry_every: TELEMETRY_EVERY,
            fps_cap: FPS_CAP,
        }
    }
}

impl SimConfig {
    /// Check every invariant the simulation relies on.
    ///
    /// Invalid configuration is the one startup failure class the simulation
    /// domain defines; nothing after this point can fail recoverably.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playfield_width <= 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                axis: "width",
                value: self.playfield_width,
            });
        }
        if self.playfield_height <= 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                axis: "height",
                value: self.playfield_height,
            });
        }

        for (name, value) in [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("rotation_step", self.rotation_step),
            ("fire_speed", self.fire_speed),
            ("asteroid_max_drift", self.asteroid_max_drift),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveTuning { name, value });
            }
        }

        for (task, every) in [
            ("motion", self.motion_every),
            ("collision", self.collision_every),
            ("ship_check", self.ship_check_every),
            ("purge", self.purge_every),
            ("decel", self.decel_every),
            ("telemetry", self.telemetry_every),
        ] {
            if every == 0 {
                return Err(ConfigError::ZeroInterval { task });
            }
        }

        if self.projectile_ttl_ticks == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        if self.field_min >= self.field_max {
            return Err(ConfigError::EmptyPopulationRange {
                min: self.field_min,
                max: self.field_max,
            });
        }

        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
