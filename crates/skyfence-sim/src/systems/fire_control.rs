//! Fire control system — reload countdowns and firing decisions for
//! ground batteries.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfence_core::components::{Missile, Position, Velocity};
use skyfence_core::types::Vec2;

use crate::defence::Defence;
use crate::tracker::Tracker;

/// Run fire control for every battery.
///
/// A ready battery with at least one missile in range fires exactly one
/// round at a uniformly chosen candidate, then starts its reload at
/// `reload_time - dt` and skips the regular decrement for this frame.
/// In every other case the countdown decrements by this frame's dt,
/// even when it is already at or below zero.
pub fn run(
    world: &mut World,
    defences: &mut [Defence],
    rng: &mut ChaCha8Rng,
    tracker: &mut Tracker,
    dt: f64,
) {
    // One shared view of the missile population; a battery firing does
    // not remove its target, so every battery sees the same candidates.
    let missiles: Vec<(Entity, Vec2, Vec2)> = world
        .query_mut::<(&Missile, &Position, &Velocity)>()
        .into_iter()
        .map(|(entity, (_missile, position, velocity))| (entity, position.0, velocity.0))
        .collect();

    for defence in defences.iter_mut() {
        if defence.ready() {
            let in_range: Vec<&(Entity, Vec2, Vec2)> = missiles
                .iter()
                .filter(|(_, position, _)| defence.position.distance(*position) < defence.range)
                .collect();

            if !in_range.is_empty() {
                let &(target, target_pos, target_vel) =
                    in_range[rng.gen_range(0..in_range.len())];
                let bundle = defence.fire(target, target_pos, target_vel);
                tracker.record_fire(bundle.0.kind);
                world.spawn(bundle);
                defence.reload_remaining = defence.reload_time - dt;
                continue;
            }
        }
        defence.reload_remaining -= dt;
    }
}
