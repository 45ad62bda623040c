//! Collision detection between circles on the playfield
//!
//! Two periodic sweeps drive destruction: projectiles against asteroids
//! (which marks both and enqueues split children), and the ship against
//! asteroids (detection only). Each pair is checked independently; the
//! `collided` flag is idempotent, so double hits in one sweep are harmless.

use super::spawn;
use super::state::{Mobile, SimEvent, World};
use crate::distance;

/// Circle overlap test: centers within the sum of radii.
///
/// Symmetric by construction: `intersects(a, b) == intersects(b, a)`.
pub fn intersects(a: &impl Mobile, b: &impl Mobile) -> bool {
    distance(a.position(), b.position()) <= a.radius() + b.radius()
}

/// All-pairs sweep of projectiles against asteroids.
///
/// On a hit both participants are flagged. The first hit on an asteroid
/// with a splittable size enqueues two children at the parent position
/// immediately; children joining mid-sweep are not re-checked until the
/// next sweep.
pub fn sweep_projectiles(world: &mut World) {
    if world.projectiles.is_empty() || world.asteroids.is_empty() {
        return;
    }

    // Projectiles that entered the sweep already flagged (expired or spent
    // in an earlier sweep, awaiting purge) take no further part. Flags set
    // during this sweep don't disqualify remaining pairs: simultaneous
    // overlaps are independent.
    let spent: Vec<bool> = world.projectiles.iter().map(|p| p.collided).collect();

    let asteroid_count = world.asteroids.len();
    for pi in 0..world.projectiles.len() {
        if spent[pi] {
            continue;
        }
        for ai in 0..asteroid_count {
            let (hit, first_hit) = {
                let p = &world.projectiles[pi];
                let a = &world.asteroids[ai];
                (intersects(p, a), !a.collided)
            };
            if !hit {
                continue;
            }

            world.projectiles[pi].collided = true;
            if !first_hit {
                continue;
            }

            let parent_id = world.asteroids[ai].id;
            let parent_pos = world.asteroids[ai].body.pos;
            let child_tier = world.asteroids[ai].size.child();
            world.asteroids[ai].collided = true;

            match child_tier {
                Some(tier) => {
                    let children = [
                        spawn::spawn_child(world, parent_pos, tier),
                        spawn::spawn_child(world, parent_pos, tier),
                    ];
                    world.events.push(SimEvent::AsteroidSplit {
                        parent: parent_id,
                        children,
                    });
                    log::debug!(
                        "asteroid {parent_id} split into {} and {}",
                        children[0],
                        children[1]
                    );
                }
                None => {
                    world.events.push(SimEvent::AsteroidDestroyed { id: parent_id });
                    log::debug!("asteroid {parent_id} destroyed");
                }
            }
        }
    }
}

/// Detect ship/asteroid overlap.
///
/// Per current behavior the ship is never destroyed; overlaps are counted
/// and reported so a host can attach consequences later.
pub fn check_ship_contact(world: &mut World) {
    for ai in 0..world.asteroids.len() {
        let overlap = {
            let a = &world.asteroids[ai];
            !a.collided && intersects(&world.ship, a)
        };
        if overlap {
            let id = world.asteroids[ai].id;
            world.ship_contacts += 1;
            world.events.push(SimEvent::ShipContact { asteroid: id });
            log::debug!("ship overlapping asteroid {id}");
        }
    }
}
