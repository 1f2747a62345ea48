//! Missile generators — stochastic sources of inbound missiles.

use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};

use skyfence_core::components::{BoostState, Missile, MissileKind};
use skyfence_core::config::{BallisticGeneratorConfig, BoostGeneratorConfig};
use skyfence_core::constants::{BALLISTIC_MISSILE_DAMAGE, BOOST_MISSILE_DAMAGE};
use skyfence_core::types::Vec2;

/// Variant-specific generator parameters.
#[derive(Debug, Clone)]
pub enum GeneratorKind {
    Ballistic,
    Boost {
        /// Speed added when the boost fires.
        boost: f64,
        /// Seconds before projected impact at which the boost fires.
        boost_timer: f64,
    },
}

/// Produces one missile variant at a Poisson-distributed arrival rate.
///
/// Stateless across frames; all randomness comes from the random
/// source handed to `draw_arrivals`.
#[derive(Debug, Clone)]
pub struct MissileGenerator {
    pub kind: GeneratorKind,
    /// Mean arrival rate in missiles per second.
    pub frequency: f64,
    /// Launch speed of produced missiles.
    pub speed: f64,
}

impl MissileGenerator {
    pub fn ballistic(cfg: &BallisticGeneratorConfig) -> Self {
        Self {
            kind: GeneratorKind::Ballistic,
            frequency: cfg.frequency,
            speed: cfg.speed,
        }
    }

    pub fn boost(cfg: &BoostGeneratorConfig) -> Self {
        Self {
            kind: GeneratorKind::Boost {
                boost: cfg.boost,
                boost_timer: cfg.boost_timer,
            },
            frequency: cfg.frequency,
            speed: cfg.speed,
        }
    }

    /// Number of new arrivals this frame, drawn from a Poisson process
    /// with mean `frequency * dt`. A zero rate produces zero arrivals
    /// without touching the random source.
    pub fn draw_arrivals(&self, rng: &mut ChaCha8Rng, dt: f64) -> u64 {
        let mean = self.frequency * dt;
        if mean <= 0.0 {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(poisson) => poisson.sample(rng) as u64,
            Err(_) => 0,
        }
    }

    /// Build the missile component for a fresh spawn at the given
    /// position and velocity.
    pub fn missile(&self, position: Vec2, velocity: Vec2) -> Missile {
        match self.kind {
            GeneratorKind::Ballistic => Missile {
                kind: MissileKind::Ballistic,
                damage: BALLISTIC_MISSILE_DAMAGE,
            },
            GeneratorKind::Boost { boost, boost_timer } => {
                // Projected seconds to the ground at the unboosted
                // speed. The countdown may come out negative, which
                // fires the boost right after the first flight update.
                let time_to_impact = -position.y / velocity.y;
                Missile {
                    kind: MissileKind::Boost(BoostState {
                        countdown: time_to_impact - boost_timer,
                        amount: boost,
                        spent: false,
                    }),
                    damage: BOOST_MISSILE_DAMAGE,
                }
            }
        }
    }
}
