//! Telemetry sink boundary
//!
//! A slow-cadence, read-only consumer of simulation state: ship kinematics
//! and live entity counts, refreshed roughly twice a second for display.

use serde::{Deserialize, Serialize};

use crate::sim::World;

/// One telemetry sample.
///
/// `heading` is the raw accumulated value, matching what the original HUD
/// displayed; `dx`/`dy` are the rounded per-tick ship deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub speed: f32,
    pub heading: f32,
    pub dx: i32,
    pub dy: i32,
    pub projectiles: usize,
    pub asteroids: usize,
}

impl Telemetry {
    /// Sample the world without mutating it.
    pub fn capture(world: &World) -> Self {
        Self {
            speed: world.ship.speed,
            heading: world.ship.heading,
            dx: world.ship.dx(),
            dy: world.ship.dy(),
            projectiles: world.projectiles.len(),
            asteroids: world.asteroids.len(),
        }
    }
}

/// Consumes telemetry samples on the telemetry cadence.
pub trait TelemetrySink {
    fn publish(&mut self, sample: &Telemetry);
}

/// Sink that writes samples to the log, for headless sessions.
#[derive(Debug, Default)]
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn publish(&mut self, sample: &Telemetry) {
        log::info!(
            "speed={:.1} heading={:.0} dx={} dy={} projectiles={} asteroids={}",
            sample.speed,
            sample.heading,
            sample.dx,
            sample.dy,
            sample.projectiles,
            sample.asteroids,
        );
    }
}
