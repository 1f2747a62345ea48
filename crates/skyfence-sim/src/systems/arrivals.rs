//! Arrival system — draws new inbound missiles from each generator's
//! Poisson process and spawns them into the world.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skyfence_core::components::{Position, Velocity};

use crate::generator::MissileGenerator;
use crate::spawner::Spawner;
use crate::tracker::Tracker;

/// Spawn this frame's new arrivals.
///
/// Missiles spawned here are not seen by the other systems until the
/// next frame, so an arrival can never be shot at or land in the frame
/// it appears.
pub fn run(
    world: &mut World,
    generators: &[MissileGenerator],
    spawner: &Spawner,
    rng: &mut ChaCha8Rng,
    tracker: &mut Tracker,
    dt: f64,
) {
    for generator in generators {
        let count = generator.draw_arrivals(rng, dt);
        for _ in 0..count {
            let (position, velocity) = spawner.generate(generator.speed, rng);
            let missile = generator.missile(position, velocity);
            tracker.record_launch(missile.kind);
            world.spawn((missile, Position(position), Velocity(velocity)));
        }
        if count > 0 {
            log::debug!("spawned {count} inbound missiles");
        }
    }
}
