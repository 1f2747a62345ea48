//! Projectile resolution system — moves defensive projectiles and
//! resolves their hit and miss outcomes.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfence_core::components::{Missile, Position, Projectile, ProjectileKind, Velocity};

use crate::tracker::Tracker;

/// Run projectile resolution.
///
/// The projectile set is collected before any mutation, so removals
/// during the pass never skip or revisit an element. An intercepted
/// missile is despawned on the spot: a second projectile aimed at it
/// this frame finds the handle stale and resolves as a miss rather
/// than scoring the same kill twice.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tracker: &mut Tracker,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    despawn_buffer.clear();

    let projectiles: Vec<(Entity, Projectile)> = world
        .query_mut::<&Projectile>()
        .into_iter()
        .map(|(entity, projectile)| (entity, projectile.clone()))
        .collect();

    for (entity, projectile) in projectiles {
        // A stale handle means the target is already gone, removed by
        // an earlier projectile this frame or by reaching the ground.
        let target = world
            .query_one_mut::<(&Position, &Missile)>(projectile.target)
            .map(|(position, missile)| (position.0, *missile))
            .ok();
        let Some((target_pos, target_missile)) = target else {
            despawn_buffer.push(entity);
            continue;
        };

        match projectile.kind {
            ProjectileKind::Bullet { accuracy } => {
                let crossed = match world.query_one_mut::<(&mut Position, &Velocity)>(entity) {
                    Ok((position, velocity)) => {
                        // Crossing test against the pre-move gap: the
                        // round hits once a frame's travel exceeds the
                        // remaining distance to the target.
                        let gap = position.0.distance(target_pos);
                        let step = velocity.0 * dt;
                        position.0 += step;
                        step.magnitude() > gap
                    }
                    Err(_) => false,
                };

                if crossed {
                    if rng.gen_bool(accuracy) {
                        let _ = world.despawn(projectile.target);
                        tracker.record_intercept(target_missile.kind);
                        log::debug!("bullet intercept at {:.1}m altitude", target_pos.y);
                    }
                    despawn_buffer.push(entity);
                }
            }
            ProjectileKind::Seeker { explosion_radius } => {
                let hit = match world.query_one_mut::<(&mut Position, &mut Velocity)>(entity) {
                    Ok((position, velocity)) => {
                        // Re-aim at the target's current position,
                        // keeping speed, then advance.
                        let speed = velocity.0.magnitude();
                        velocity.0 = target_pos - position.0;
                        velocity.0.rescale(speed);
                        position.0 += velocity.0 * dt;
                        explosion_radius > position.0.distance(target_pos)
                    }
                    Err(_) => false,
                };

                if hit {
                    let _ = world.despawn(projectile.target);
                    tracker.record_intercept(target_missile.kind);
                    despawn_buffer.push(entity);
                    log::debug!("seeker intercept at {:.1}m altitude", target_pos.y);
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
