//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// World-space position in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in meters per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Which flight model an inbound missile follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MissileKind {
    /// Flies a straight line from spawn to aim point.
    Ballistic,
    /// Ballistic until the countdown expires, then a one-shot speed
    /// increase along the current heading.
    Boost(BoostState),
}

/// Mutable boost-phase state carried by boost missiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostState {
    /// Seconds until the boost fires. May start negative, in which
    /// case the boost fires after the first flight update.
    pub countdown: f64,
    /// Speed gained when the boost fires.
    pub amount: f64,
    /// Set once the boost has fired so it never fires twice.
    pub spent: bool,
}

/// An inbound missile threatening the protected target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub kind: MissileKind,
    /// Damage dealt to the target on ground impact.
    pub damage: f64,
}

/// How a defensive projectile closes on its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Unguided round. Kill chance is rolled once, when it crosses its
    /// target's position.
    Bullet { accuracy: f64 },
    /// Guided round. Re-aims at its target every frame and kills on
    /// proximity.
    Seeker { explosion_radius: f64 },
}

/// A defensive projectile in flight.
///
/// Holds the entity handle of the missile it was fired at. A stale
/// handle (target despawned) resolves the projectile as a miss.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// The missile this projectile was fired at.
    pub target: hecs::Entity,
}
