//! Wraparound motion
//!
//! Advances entities by their fixed per-tick velocity and relocates them
//! across playfield edges. Margins are asymmetric: an entity must fully
//! leave the field before it reappears on the far side, which avoids
//! sprites visibly popping at the edge.

use glam::Vec2;

use super::state::{Mobile, Playfield};
use crate::consts::{WRAP_ENTRY_MARGIN, WRAP_EXIT_MARGIN};

/// Advance position by one tick's velocity.
pub fn integrate<M: Mobile>(entity: &mut M) {
    let pos = entity.position() + entity.velocity();
    entity.set_position(pos);
}

/// Wrap a single coordinate against a playfield bound.
///
/// Past the high edge (plus a small margin) the coordinate resets to 0;
/// past the low edge (minus a larger margin) it resets to the far bound.
#[inline]
pub fn wrap_coord(value: f32, bound: f32) -> f32 {
    if value > bound + WRAP_EXIT_MARGIN {
        0.0
    } else if value < -WRAP_ENTRY_MARGIN {
        bound
    } else {
        value
    }
}

/// Relocate an entity that has drifted past the wrap margins.
pub fn wrap<M: Mobile>(entity: &mut M, playfield: &Playfield) {
    let pos = entity.position();
    let wrapped = Vec2::new(
        wrap_coord(pos.x, playfield.width),
        wrap_coord(pos.y, playfield.height),
    );
    if wrapped != pos {
        entity.set_position(wrapped);
    }
}

/// One motion tick: integrate, then wrap.
pub fn step<M: Mobile>(entity: &mut M, playfield: &Playfield) {
    integrate(entity);
    wrap(entity, playfield);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Body;
    use crate::sim::Projectile;
    use proptest::prelude::*;

    fn projectile_at(pos: Vec2, vel: Vec2) -> Projectile {
        Projectile {
            id: 1,
            body: Body {
                pos,
                vel,
                radius: 5.0,
            },
            heading: 0.0,
            spawn_tick: 0,
            collided: false,
        }
    }

    #[test]
    fn test_integrate_adds_velocity_once() {
        let mut p = projectile_at(Vec2::new(10.0, 20.0), Vec2::new(3.0, -4.0));
        integrate(&mut p);
        assert_eq!(p.position(), Vec2::new(13.0, 16.0));
    }

    #[test]
    fn test_wrap_high_edge_resets_to_zero() {
        let playfield = Playfield::new(800.0, 600.0);

        // Inside the exit margin: untouched
        let mut p = projectile_at(Vec2::new(815.0, 100.0), Vec2::ZERO);
        wrap(&mut p, &playfield);
        assert_eq!(p.position().x, 815.0);

        // Past the margin: relocated
        let mut p = projectile_at(Vec2::new(821.0, 100.0), Vec2::ZERO);
        wrap(&mut p, &playfield);
        assert_eq!(p.position().x, 0.0);
    }

    #[test]
    fn test_wrap_low_edge_resets_to_far_bound() {
        let playfield = Playfield::new(800.0, 600.0);

        // Inside the entry margin: untouched
        let mut p = projectile_at(Vec2::new(100.0, -149.0), Vec2::ZERO);
        wrap(&mut p, &playfield);
        assert_eq!(p.position().y, -149.0);

        // Past the margin: relocated
        let mut p = projectile_at(Vec2::new(100.0, -151.0), Vec2::ZERO);
        wrap(&mut p, &playfield);
        assert_eq!(p.position().y, 600.0);
    }

    #[test]
    fn test_in_bounds_entity_never_teleports() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut p = projectile_at(Vec2::new(400.0, 300.0), Vec2::new(2.0, 1.0));
        step(&mut p, &playfield);
        assert_eq!(p.position(), Vec2::new(402.0, 301.0));
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_in_margin_band(
            value in -10_000.0f32..10_000.0,
            bound in 1.0f32..5_000.0,
        ) {
            let wrapped = wrap_coord(value, bound);
            prop_assert!(wrapped >= -WRAP_ENTRY_MARGIN);
            prop_assert!(wrapped <= bound + WRAP_EXIT_MARGIN);
        }

        #[test]
        fn prop_wrap_is_identity_inside_band(
            t in 0.0f32..1.0,
            bound in 1.0f32..5_000.0,
        ) {
            // Any coordinate already inside the margin band stays put
            let value = -WRAP_ENTRY_MARGIN + t * (bound + WRAP_EXIT_MARGIN + WRAP_ENTRY_MARGIN);
            prop_assert_eq!(wrap_coord(value, bound), value);
        }
    }
}
