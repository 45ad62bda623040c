//! Fixed-tick scheduling and the coordinating simulation step
//!
//! The original host ran each concern on its own ambient timer. Here every
//! periodic task is named with a declared interval and invoked from one
//! loop, so mutations of the shared collections never interleave.

use super::state::World;
use super::{collision, motion, spawn};
use crate::config::SimConfig;

/// Control intents for a single tick; one-shot, cleared by the host after
/// each processed tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlInput {
    /// Rotate the ship counter-clockwise by one rotation step
    pub rotate_left: bool,
    /// Rotate the ship clockwise by one rotation step
    pub rotate_right: bool,
    /// Accelerate along the current heading, up to max speed
    pub thrust: bool,
    /// Spawn a projectile from the ship
    pub fire: bool,
    /// Regenerate the whole asteroid field
    pub reset_field: bool,
}

/// A named periodic task interval, in base ticks.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    pub name: &'static str,
    every: u32,
}

impl Periodic {
    pub fn new(name: &'static str, every: u32) -> Self {
        debug_assert!(every > 0, "interval for '{name}' must be nonzero");
        Self { name, every }
    }

    /// Whether this task runs on the given tick.
    pub fn due(&self, tick: u64) -> bool {
        tick % self.every as u64 == 0
    }

    pub fn every(&self) -> u32 {
        self.every
    }
}

/// All periodic tasks with their declared cadences.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub motion: Periodic,
    pub collision: Periodic,
    pub ship_check: Periodic,
    pub purge: Periodic,
    pub decel: Periodic,
    /// Consulted by the host, not by `tick` itself
    pub telemetry: Periodic,
}

impl Schedule {
    /// Build the schedule from a validated config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            motion: Periodic::new("motion", config.motion_every),
            collision: Periodic::new("collision", config.collision_every),
            ship_check: Periodic::new("ship_check", config.ship_check_every),
            purge: Periodic::new("purge", config.purge_every),
            decel: Periodic::new("decel", config.decel_every),
            telemetry: Periodic::new("telemetry", config.telemetry_every),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// Advance the world by one base tick, running every task that is due.
///
/// Task order is fixed: input, motion, expiry, collision sweep, ship
/// contact check, deceleration, purge. Each runs to completion before the
/// next, so no two mutations of the shared collections ever race.
pub fn tick(world: &mut World, schedule: &Schedule, input: &ControlInput) {
    world.tick += 1;

    apply_input(world, input);

    if schedule.motion.due(world.tick) {
        let playfield = world.playfield;
        motion::step(&mut world.ship, &playfield);
        for projectile in &mut world.projectiles {
            motion::step(projectile, &playfield);
        }
        for asteroid in &mut world.asteroids {
            motion::step(asteroid, &playfield);
        }
    }

    // TTL is a per-projectile wall-clock rule, checked every tick
    spawn::expire_projectiles(world);

    if schedule.collision.due(world.tick) {
        collision::sweep_projectiles(world);
    }
    if schedule.ship_check.due(world.tick) {
        collision::check_ship_contact(world);
    }
    if schedule.decel.due(world.tick) {
        decelerate(world);
    }
    if schedule.purge.due(world.tick) {
        spawn::purge(world);
    }
}

/// Map discrete control intents onto ship state.
fn apply_input(world: &mut World, input: &ControlInput) {
    if input.rotate_left {
        world.ship.heading -= world.config.rotation_step;
    }
    if input.rotate_right {
        world.ship.heading += world.config.rotation_step;
    }
    if input.thrust && world.ship.speed < world.config.max_speed {
        world.ship.speed =
            (world.ship.speed + world.config.acceleration).min(world.config.max_speed);
    }
    if input.fire {
        spawn::fire_projectile(world);
    }
    if input.reset_field {
        spawn::populate_field(world);
    }
}

/// Passive deceleration: speed decays toward zero when no thrust arrives.
fn decelerate(world: &mut World) {
    world.ship.speed = (world.ship.speed - world.config.deceleration).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::{Asteroid, Body, Projectile, SimEvent, SizeTier};
    use glam::Vec2;

    fn world() -> World {
        let mut w = World::new(SimConfig::default(), 5).unwrap();
        w.asteroids.clear();
        w
    }

    fn thrust() -> ControlInput {
        ControlInput {
            thrust: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_schedule_carries_configured_cadences() {
        let mut config = SimConfig::default();
        config.collision_every = 7;
        let schedule = Schedule::from_config(&config);

        assert_eq!(schedule.collision.every(), 7);
        assert_eq!(schedule.collision.name, "collision");
        assert!(schedule.collision.due(14));
        assert!(!schedule.collision.due(15));
    }

    #[test]
    fn test_thrust_reaches_max_exactly_without_overshoot() {
        let mut w = world();
        let schedule = Schedule::default();

        for _ in 0..5 {
            tick(&mut w, &schedule, &thrust());
        }
        assert_eq!(w.ship.speed, 10.0);

        // A sixth thrust has no effect at max
        tick(&mut w, &schedule, &thrust());
        assert_eq!(w.ship.speed, 10.0);
    }

    #[test]
    fn test_deceleration_drives_speed_to_exactly_zero() {
        let mut w = world();
        w.ship.speed = 7.0;

        let mut previous = w.ship.speed;
        for _ in 0..10 {
            decelerate(&mut w);
            assert!(w.ship.speed <= previous);
            assert!(w.ship.speed >= 0.0);
            previous = w.ship.speed;
        }
        assert_eq!(w.ship.speed, 0.0);
    }

    #[test]
    fn test_rotation_accumulates_unbounded() {
        let mut w = world();
        let schedule = Schedule::default();
        let right = ControlInput {
            rotate_right: true,
            ..Default::default()
        };

        for _ in 0..40 {
            tick(&mut w, &schedule, &right);
        }
        assert_eq!(w.ship.heading, 400.0);

        let left = ControlInput {
            rotate_left: true,
            ..Default::default()
        };
        for _ in 0..50 {
            tick(&mut w, &schedule, &left);
        }
        assert_eq!(w.ship.heading, -100.0);
    }

    #[test]
    fn test_fire_and_expire_scenario() {
        let mut w = world();
        let schedule = Schedule::default();
        let fire = ControlInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut w, &schedule, &fire);
        assert_eq!(w.projectiles.len(), 1);
        let id = w.projectiles[0].id;
        let spawn_tick = w.projectiles[0].spawn_tick;

        // Run to 0.9 s after spawn: still live
        let idle = ControlInput::default();
        while w.tick < spawn_tick + 90 {
            tick(&mut w, &schedule, &idle);
        }
        let p = w.projectiles.iter().find(|p| p.id == id);
        assert!(p.is_some_and(|p| !p.collided));

        // Run to 1.1 s after spawn: expired (flagged or already purged)
        while w.tick < spawn_tick + 110 {
            tick(&mut w, &schedule, &idle);
        }
        assert!(w.projectiles.iter().all(|p| p.id != id));
        assert!(
            w.drain_events()
                .iter()
                .any(|e| matches!(e, SimEvent::ProjectileExpired { id: i } if *i == id))
        );
    }

    #[test]
    fn test_reset_field_regenerates_population() {
        let mut w = world();
        assert!(w.asteroids.is_empty());

        let schedule = Schedule::default();
        let reset = ControlInput {
            reset_field: true,
            ..Default::default()
        };
        tick(&mut w, &schedule, &reset);

        let count = w.asteroids.len() as u32;
        assert!(count >= w.config.field_min && count < w.config.field_max);
    }

    #[test]
    fn test_full_split_chain_yields_four_terminal_fragments() {
        let mut w = world();
        let id = w.next_entity_id();
        w.asteroids.push(Asteroid {
            id,
            body: Body {
                pos: Vec2::new(400.0, 300.0),
                vel: Vec2::ZERO,
                radius: SizeTier::Large.radius(),
            },
            size: SizeTier::Large,
            heading: 0.0,
            collided: false,
        });

        // Shoot every live asteroid until the field is cleared
        let mut rounds = 0;
        while !w.asteroids.is_empty() {
            let targets: Vec<Vec2> = w.asteroids.iter().map(|a| a.body.pos).collect();
            for pos in targets {
                let pid = w.next_entity_id();
                w.projectiles.push(Projectile {
                    id: pid,
                    body: Body {
                        pos,
                        vel: Vec2::ZERO,
                        radius: 5.0,
                    },
                    heading: 0.0,
                    spawn_tick: w.tick,
                    collided: false,
                });
            }
            collision::sweep_projectiles(&mut w);
            spawn::purge(&mut w);
            rounds += 1;
            assert!(rounds <= 3, "split chain should terminate in three rounds");
        }

        let events = w.drain_events();
        let splits = events
            .iter()
            .filter(|e| matches!(e, SimEvent::AsteroidSplit { .. }))
            .count();
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, SimEvent::AsteroidDestroyed { .. }))
            .count();
        // One large split, two medium splits, four terminal smalls
        assert_eq!(splits, 3);
        assert_eq!(destroyed, 4);
    }

    #[test]
    fn test_tick_tolerates_empty_world() {
        let mut w = world();
        w.projectiles.clear();
        let schedule = Schedule::default();
        for _ in 0..200 {
            tick(&mut w, &schedule, &ControlInput::default());
        }
        assert_eq!(w.tick, 200);
    }
}
