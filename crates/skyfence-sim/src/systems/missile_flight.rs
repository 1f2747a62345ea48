//! Missile flight system — advances inbound missiles, fires boosts,
//! and resolves ground impact.

use hecs::{Entity, World};

use skyfence_core::components::{Missile, MissileKind, Position, Velocity};
use skyfence_core::constants::GROUND_Y;

use crate::tracker::Tracker;

/// Advance all missiles one frame.
///
/// Position integrates before the boost countdown is serviced, so a
/// boost firing affects motion from the next frame on. A missile whose
/// altitude drops below the ground line is removed; if it comes down
/// within `target_radius` of the origin it scores a hit on the
/// protected target first.
pub fn run(
    world: &mut World,
    tracker: &mut Tracker,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
    target_radius: f64,
) {
    despawn_buffer.clear();

    let mut grounded: Vec<(Entity, f64, MissileKind, f64)> = Vec::new();

    for (entity, (missile, position, velocity)) in
        world.query_mut::<(&mut Missile, &mut Position, &mut Velocity)>()
    {
        position.0 += velocity.0 * dt;

        if let MissileKind::Boost(state) = &mut missile.kind {
            state.countdown -= dt;
            if state.countdown < 0.0 && !state.spent {
                let speed = velocity.0.magnitude();
                velocity.0.rescale(speed + state.amount);
                state.spent = true;
            }
        }

        if position.0.y < GROUND_Y {
            grounded.push((entity, position.0.x, missile.kind, missile.damage));
        }
    }

    for (entity, impact_x, kind, damage) in grounded {
        if impact_x.abs() < target_radius {
            tracker.record_target_hit(kind, damage);
            log::debug!("missile struck the target area at x = {impact_x:.1}m");
        }
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
