//! Spawning and lifecycle management
//!
//! Owns every entity creation and removal path: the initial asteroid field,
//! split children, projectile fire and expiry, and the purge sweep that
//! compacts out flagged entities.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Body, Projectile, SimEvent, SizeTier, World};
use crate::heading_vector;

/// Regenerate the whole asteroid field from the seeded RNG.
///
/// Used at session start and for the on-demand field reset intent.
pub fn populate_field(world: &mut World) {
    world.asteroids.clear();

    let min = world.config.field_min;
    let max = world.config.field_max;
    let count = world.rng.random_range(min..max);
    for _ in 0..count {
        spawn_random_asteroid(world);
    }

    world.events.push(SimEvent::FieldReset { count });
    log::info!("asteroid field populated with {count} asteroids");
}

fn spawn_random_asteroid(world: &mut World) {
    let width = world.playfield.width;
    let height = world.playfield.height;
    let drift = world.config.asteroid_max_drift;

    let pos = Vec2::new(
        world.rng.random_range(0.0..width),
        world.rng.random_range(0.0..height),
    );
    let size = SizeTier::from_index(world.rng.random_range(0..3));
    push_asteroid(world, pos, size, drift);
}

/// Spawn one child asteroid at a split parent's position.
pub fn spawn_child(world: &mut World, pos: Vec2, size: SizeTier) -> u32 {
    let drift = world.config.asteroid_max_drift;
    push_asteroid(world, pos, size, drift)
}

fn push_asteroid(world: &mut World, pos: Vec2, size: SizeTier, drift: f32) -> u32 {
    let id = world.next_entity_id();
    let vel = Vec2::new(
        world.rng.random_range(-drift..drift),
        world.rng.random_range(-drift..drift),
    );
    let heading = world.rng.random_range(0.0..360.0);
    world.asteroids.push(Asteroid {
        id,
        body: Body {
            pos,
            vel,
            radius: size.radius(),
        },
        size,
        heading,
        collided: false,
    });
    id
}

/// Fire a projectile from the ship's position along its heading.
///
/// Muzzle speed is fixed and independent of the ship's current speed.
pub fn fire_projectile(world: &mut World) -> u32 {
    let id = world.next_entity_id();
    let heading = world.ship.heading;
    world.projectiles.push(Projectile {
        id,
        body: Body {
            pos: world.ship.pos,
            vel: heading_vector(heading) * world.config.fire_speed,
            radius: crate::consts::PROJECTILE_RADIUS,
        },
        heading,
        spawn_tick: world.tick,
        collided: false,
    });
    world.events.push(SimEvent::ProjectileFired { id });
    log::debug!("projectile {id} fired at heading {heading:.0}");
    id
}

/// Expire projectiles whose lifetime has elapsed.
///
/// Evaluated per projectile against its own spawn tick, independent of the
/// purge cadence.
pub fn expire_projectiles(world: &mut World) {
    let ttl = world.config.projectile_ttl_ticks;
    let tick = world.tick;
    for projectile in &mut world.projectiles {
        if !projectile.collided && tick.saturating_sub(projectile.spawn_tick) > ttl {
            projectile.collided = true;
            world.events.push(SimEvent::ProjectileExpired { id: projectile.id });
        }
    }
}

/// Compact pass: rebuild the live sets without flagged entities.
///
/// Removes exactly the entities whose `collided` flag is set; a just-flagged
/// entity may survive until the next purge tick, which is tolerated.
pub fn purge(world: &mut World) {
    let before = world.projectiles.len() + world.asteroids.len();
    world.projectiles.retain(|p| !p.collided);
    world.asteroids.retain(|a| !a.collided);
    let removed = before - world.projectiles.len() - world.asteroids.len();
    if removed > 0 {
        log::debug!("purged {removed} entities");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn world() -> World {
        World::new(SimConfig::default(), 99).unwrap()
    }

    #[test]
    fn test_populate_field_count_in_bounds() {
        let mut w = world();
        for _ in 0..50 {
            populate_field(&mut w);
            let count = w.asteroids.len() as u32;
            assert!(count >= w.config.field_min);
            assert!(count < w.config.field_max);
        }
    }

    #[test]
    fn test_populate_field_positions_in_bounds() {
        let mut w = world();
        populate_field(&mut w);
        for a in &w.asteroids {
            assert!(a.body.pos.x >= 0.0 && a.body.pos.x < w.playfield.width);
            assert!(a.body.pos.y >= 0.0 && a.body.pos.y < w.playfield.height);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = World::new(SimConfig::default(), 1234).unwrap();
        let b = World::new(SimConfig::default(), 1234).unwrap();
        assert_eq!(a.asteroids.len(), b.asteroids.len());
        for (x, y) in a.asteroids.iter().zip(b.asteroids.iter()) {
            assert_eq!(x.body.pos, y.body.pos);
            assert_eq!(x.size, y.size);
        }
    }

    #[test]
    fn test_fire_uses_heading_not_ship_speed() {
        let mut w = world();
        w.ship.heading = 90.0;
        w.ship.speed = 3.0;
        let id = fire_projectile(&mut w);

        let p = w.projectiles.iter().find(|p| p.id == id).unwrap();
        assert_eq!(p.body.pos, w.ship.pos);
        // Muzzle speed is the configured fire speed, not ship speed
        assert!((p.body.vel.length() - w.config.fire_speed).abs() < 1e-4);
        assert!((p.body.vel.x - (-10.0)).abs() < 1e-4);
        assert!(p.body.vel.y.abs() < 1e-4);
    }

    #[test]
    fn test_expiry_is_per_projectile() {
        let mut w = world();
        w.tick = 0;
        let early = fire_projectile(&mut w);
        w.tick = 40;
        let late = fire_projectile(&mut w);

        w.tick = 110;
        expire_projectiles(&mut w);

        let early = w.projectiles.iter().find(|p| p.id == early).unwrap();
        let late = w.projectiles.iter().find(|p| p.id == late).unwrap();
        assert!(early.collided);
        assert!(!late.collided);
    }

    #[test]
    fn test_expiry_threshold() {
        let mut w = world();
        w.tick = 0;
        fire_projectile(&mut w);

        // 0.9 seconds: still live
        w.tick = 90;
        expire_projectiles(&mut w);
        assert!(!w.projectiles[0].collided);

        // 1.1 seconds: expired
        w.tick = 110;
        expire_projectiles(&mut w);
        assert!(w.projectiles[0].collided);
    }

    #[test]
    fn test_purge_removes_exactly_the_flagged() {
        let mut w = world();
        w.asteroids.clear();
        let keep = fire_projectile(&mut w);
        let gone = fire_projectile(&mut w);
        w.projectiles.iter_mut().find(|p| p.id == gone).unwrap().collided = true;

        purge(&mut w);

        assert_eq!(w.projectiles.len(), 1);
        assert_eq!(w.projectiles[0].id, keep);
    }

    #[test]
    fn test_purge_tolerates_empty_collections() {
        let mut w = world();
        w.asteroids.clear();
        w.projectiles.clear();
        purge(&mut w);
        assert!(w.asteroids.is_empty());
        assert!(w.projectiles.is_empty());
    }
}
