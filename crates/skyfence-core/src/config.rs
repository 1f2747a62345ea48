//! Scenario configuration value structs.
//!
//! Field names follow Rust conventions; the scenario-file JSON keys
//! (units spelled out, legacy spellings included) are preserved
//! verbatim through serde renames. Loading and validation live in
//! skyfence-sim's scenario module.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEED;

/// Global simulation settings, one per scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Total simulated time in seconds.
    #[serde(rename = "simulation time (s)")]
    pub simulation_time: f64,
    /// Frames per simulated second.
    #[serde(rename = "frame rate(hz)")]
    pub frame_rate: f64,
    /// Half-width of the protected strip on the ground line.
    #[serde(rename = "target radius (m)")]
    pub target_radius: f64,
    /// Radius of the circle missiles spawn on.
    #[serde(rename = "missile spawn radius (m)")]
    pub missile_spawn_radius: f64,
    /// Smallest allowed spawn elevation above the horizon, in degrees.
    #[serde(rename = "minimum incoming missile angle (deg)")]
    pub minimum_incoming_angle_deg: f64,
    /// RNG seed. Optional in the file.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Parameters for a gun battery firing unguided rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletDefenceConfig {
    /// Ground position along the x-axis.
    #[serde(rename = "location (m)")]
    pub location_x: f64,
    #[serde(rename = "reload time (s)")]
    pub reload_time: f64,
    #[serde(rename = "projectile speed (m/s)")]
    pub projectile_speed: f64,
    /// Kill probability per qualifying hit, in `[0, 1]` despite the
    /// legacy key name.
    #[serde(rename = "accuracy (%)")]
    pub accuracy: f64,
    #[serde(rename = "range (m)")]
    pub range: f64,
}

/// Parameters for a battery firing homing rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerDefenceConfig {
    /// Ground position along the x-axis.
    #[serde(rename = "location (m)")]
    pub location_x: f64,
    #[serde(rename = "reload time (s)")]
    pub reload_time: f64,
    #[serde(rename = "projectile speed (m/s)")]
    pub projectile_speed: f64,
    #[serde(rename = "explosion radius (m)")]
    pub explosion_radius: f64,
    #[serde(rename = "range (m)")]
    pub range: f64,
}

/// Parameters for a generator producing ballistic missiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallisticGeneratorConfig {
    /// Mean arrival rate in missiles per second.
    #[serde(rename = "frequency (missiles/second)")]
    pub frequency: f64,
    #[serde(rename = "speed (m/s)")]
    pub speed: f64,
}

/// Parameters for a generator producing boost missiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostGeneratorConfig {
    /// Mean arrival rate in missiles per second.
    #[serde(rename = "frequency (missiles/second)")]
    pub frequency: f64,
    #[serde(rename = "speed (m/s)")]
    pub speed: f64,
    /// Speed added when the boost fires.
    #[serde(rename = "boost (m/s)")]
    pub boost: f64,
    /// Seconds before projected impact at which the boost fires.
    #[serde(rename = "boost timer (s)")]
    pub boost_timer: f64,
}
