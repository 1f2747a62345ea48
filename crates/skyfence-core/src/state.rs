//! Simulation state snapshot — the complete visible state exported each frame.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::{MissileKind, ProjectileKind};
use crate::types::{SimTime, Vec2};

/// Complete world state exported after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub missiles: Vec<MissileView>,
    pub projectiles: Vec<ProjectileView>,
    pub defences: Vec<DefenceView>,
}

/// A live inbound missile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub kind: MissileKind,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A defensive projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A ground battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenceView {
    pub kind: ProjectileKind,
    pub position: Vec2,
    /// Seconds until the battery may fire again. Zero or below means ready.
    pub reload_remaining: f64,
}

/// End-of-run statistics, grouped by entity variant.
///
/// Counter keys are the variant labels of the entities involved
/// (`"ballistic missile"`, `"bullet"`, ...). BTreeMap keeps report
/// ordering stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Missiles launched, by missile variant.
    pub launches: BTreeMap<String, u64>,
    /// Projectiles fired, by projectile variant.
    pub fires: BTreeMap<String, u64>,
    /// Missiles that reached the protected target, by missile variant.
    pub target_hits: BTreeMap<String, u64>,
    /// Missiles destroyed in flight, by missile variant.
    pub intercepts: BTreeMap<String, u64>,
    /// Total damage absorbed by the protected target.
    pub damage_received: f64,
}

impl RunReport {
    /// Sum of a per-variant counter.
    pub fn total(counter: &BTreeMap<String, u64>) -> u64 {
        counter.values().sum()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Missile launches: {}", Self::total(&self.launches))?;
        writeln!(f, "Projectiles fired: {}", Self::total(&self.fires))?;
        writeln!(f, "Missiles hit target: {}", Self::total(&self.target_hits))?;
        writeln!(f, "Missiles intercepted: {}", Self::total(&self.intercepts))?;
        write!(f, "Damage received: {:.2}", self.damage_received)
    }
}
