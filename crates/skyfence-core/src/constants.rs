//! Simulation constants and tuning parameters.

/// Altitude of the ground line in meters. Missiles detonate on crossing it.
pub const GROUND_Y: f64 = 0.0;

/// RNG seed used when the scenario file does not provide one.
pub const DEFAULT_SEED: u64 = 42;

// --- Warhead yields ---

/// Damage dealt by a ballistic missile reaching the protected target.
pub const BALLISTIC_MISSILE_DAMAGE: f64 = 1.0;

/// Damage dealt by a boost missile reaching the protected target.
pub const BOOST_MISSILE_DAMAGE: f64 = 1.0;
