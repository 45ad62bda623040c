//! Render sink boundary
//!
//! Rendering consumes read-only snapshots each draw tick; it owns no
//! simulation state and its failures never touch the world. A sink is
//! expected to clear the background and draw each entity as a rotated
//! sprite sized by its radius; how it does that is its own business.

use crate::sim::{Asteroid, Projectile, Ship, World};

/// The render sink could not produce a frame. Surfaced to the caller;
/// simulation state is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render sink unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Read-only view of everything a draw tick needs.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub ship: &'a Ship,
    pub projectiles: &'a [Projectile],
    pub asteroids: &'a [Asteroid],
}

impl<'a> FrameSnapshot<'a> {
    pub fn of(world: &'a World) -> Self {
        Self {
            ship: &world.ship,
            projectiles: &world.projectiles,
            asteroids: &world.asteroids,
        }
    }
}

/// Draws frames. Implementations live outside the simulation.
pub trait RenderSink {
    fn draw(&mut self, frame: &FrameSnapshot<'_>) -> Result<(), RenderError>;
}

/// Frame-counting sink for headless sessions and tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl RenderSink for NullRenderer {
    fn draw(&mut self, _frame: &FrameSnapshot<'_>) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }
}
