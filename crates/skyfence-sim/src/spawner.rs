//! Missile spawn geometry.
//!
//! Places each new arrival on the spawn circle and aims it at a random
//! point inside the protected strip on the ground line.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyfence_core::config::SimulationSettings;
use skyfence_core::types::Vec2;

/// Generates initial position and velocity for inbound missiles.
///
/// Pure function of configuration plus the random source passed to
/// `generate`; holds no other mutable state.
#[derive(Debug, Clone)]
pub struct Spawner {
    spawn_radius: f64,
    target_radius: f64,
    /// Smallest allowed spawn elevation, radians above the horizon.
    minimum_theta: f64,
}

impl Spawner {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            spawn_radius: settings.missile_spawn_radius,
            target_radius: settings.target_radius,
            minimum_theta: settings.minimum_incoming_angle_deg.to_radians(),
        }
    }

    /// Produce a spawn position on the spawn circle and a velocity of
    /// the given speed aimed at a point on the protected strip.
    ///
    /// The spawn angle is uniform in `[minimum_theta, PI - minimum_theta]`
    /// measured from the positive x-axis, so missiles always arrive
    /// from above rather than grazing the horizon.
    pub fn generate(&self, speed: f64, rng: &mut ChaCha8Rng) -> (Vec2, Vec2) {
        let theta = self.minimum_theta + rng.gen::<f64>() * (PI - 2.0 * self.minimum_theta);
        let position = Vec2::new(theta.cos() * self.spawn_radius, theta.sin() * self.spawn_radius);

        let aim_x = (1.0 - 2.0 * rng.gen::<f64>()) * self.target_radius;

        let mut velocity = Vec2::new(aim_x - position.x, -position.y);
        velocity.rescale(speed);

        (position, velocity)
    }
}
