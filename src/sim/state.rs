//! Entity model and world state
//!
//! All state that must be persisted for snapshot/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, SimConfig};
use crate::heading_vector;

/// Fixed playfield bounds. Owns no entities; referenced by motion and spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Shared kinematic state: position, per-tick velocity, collision radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Fixed per-tick position delta (not scaled by elapsed time)
    pub vel: Vec2,
    pub radius: f32,
}

/// Anything the motion step and collision engine can handle uniformly.
pub trait Mobile {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    /// Per-tick position delta
    fn velocity(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// The player's ship. Exactly one exists, owned directly by the world.
///
/// The ship carries no `collided` flag: overlap with asteroids is detected
/// and reported, but the ship is never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Degrees; accumulates without clamping (trig wraps it implicitly)
    pub heading: f32,
    /// Signed magnitude along heading, clamped to [0, max_speed]
    pub speed: f32,
    pub radius: f32,
}

impl Ship {
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            pos: playfield.center(),
            heading: 0.0,
            speed: 0.0,
            radius: crate::consts::SHIP_RADIUS,
        }
    }

    /// Horizontal per-tick delta, rounded for telemetry display
    pub fn dx(&self) -> i32 {
        self.velocity().x.round() as i32
    }

    /// Vertical per-tick delta, rounded for telemetry display
    pub fn dy(&self) -> i32 {
        self.velocity().y.round() as i32
    }
}

impl Mobile for Ship {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
    fn velocity(&self) -> Vec2 {
        heading_vector(self.heading) * self.speed
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A projectile fired from the ship.
///
/// Velocity is fixed at fire time from the ship heading and never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
    /// Ship heading at fire time, for sprite rotation
    pub heading: f32,
    /// Tick the projectile was created on, for TTL expiry
    pub spawn_tick: u64,
    /// Lazy-deletion marker: set by expiry or by hitting an asteroid
    pub collided: bool,
}

impl Mobile for Projectile {
    fn position(&self) -> Vec2 {
        self.body.pos
    }
    fn set_position(&mut self, pos: Vec2) {
        self.body.pos = pos;
    }
    fn velocity(&self) -> Vec2 {
        self.body.vel
    }
    fn radius(&self) -> f32 {
        self.body.radius
    }
}

/// Discrete asteroid scale. Determines radius and split behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    /// Collision/draw radius for this tier (diameters 50/100/200)
    pub fn radius(self) -> f32 {
        match self {
            SizeTier::Small => 25.0,
            SizeTier::Medium => 50.0,
            SizeTier::Large => 100.0,
        }
    }

    /// Tier the children of a hit asteroid take, if any.
    /// Small is terminal and yields no children.
    pub fn child(self) -> Option<SizeTier> {
        match self {
            SizeTier::Small => None,
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Large => Some(SizeTier::Medium),
        }
    }

    pub fn from_index(index: u32) -> SizeTier {
        match index {
            0 => SizeTier::Small,
            1 => SizeTier::Medium,
            _ => SizeTier::Large,
        }
    }
}

/// A drifting asteroid. Constant velocity, no acceleration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub body: Body,
    pub size: SizeTier,
    /// Sprite rotation, degrees
    pub heading: f32,
    /// Lazy-deletion marker: set when hit by a projectile
    pub collided: bool,
}

impl Mobile for Asteroid {
    fn position(&self) -> Vec2 {
        self.body.pos
    }
    fn set_position(&mut self, pos: Vec2) {
        self.body.pos = pos;
    }
    fn velocity(&self) -> Vec2 {
        self.body.vel
    }
    fn radius(&self) -> f32 {
        self.body.radius
    }
}

/// Discrete simulation outcomes, drained by the host each frame.
///
/// Sinks observe these instead of diffing world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    ProjectileFired { id: u32 },
    ProjectileExpired { id: u32 },
    AsteroidSplit { parent: u32, children: [u32; 2] },
    AsteroidDestroyed { id: u32 },
    /// Ship overlapped an asteroid. Detection only; nothing is destroyed.
    ShipContact { asteroid: u32 },
    FieldReset { count: u32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: SimConfig,
    pub playfield: Playfield,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG. Serialized with the world, so a restored snapshot
    /// continues the exact random stream it was saved with.
    pub(crate) rng: Pcg32,
    /// Base ticks elapsed
    pub tick: u64,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    /// Pending events since the last drain
    pub events: Vec<SimEvent>,
    /// Lifetime count of detected ship/asteroid overlaps
    pub ship_contacts: u64,
    next_id: u32,
}

impl World {
    /// Create a world with a validated config and an initial asteroid field.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let playfield = Playfield::new(config.playfield_width, config.playfield_height);
        let mut world = Self {
            playfield,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick: 0,
            ship: Ship::new(&playfield),
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
            ship_contacts: 0,
            next_id: 1,
            config,
        };

        super::spawn::populate_field(&mut world);
        world.events.clear();

        log::info!(
            "world created: seed={seed}, {} asteroids",
            world.asteroids.len()
        );
        Ok(world)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all pending events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
