//! Snapshot system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use skyfence_core::components::{Missile, Position, Projectile, Velocity};
use skyfence_core::state::{DefenceView, MissileView, ProjectileView, WorldSnapshot};
use skyfence_core::types::SimTime;

use crate::defence::Defence;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(world: &World, defences: &[Defence], time: &SimTime) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        missiles: build_missiles(world),
        projectiles: build_projectiles(world),
        defences: build_defences(defences),
    }
}

/// Build MissileView list from all live missiles.
fn build_missiles(world: &World) -> Vec<MissileView> {
    world
        .query::<(&Missile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (missile, position, velocity))| MissileView {
            kind: missile.kind,
            position: position.0,
            velocity: velocity.0,
        })
        .collect()
}

/// Build ProjectileView list from all projectiles in flight.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, position, velocity))| ProjectileView {
            kind: projectile.kind,
            position: position.0,
            velocity: velocity.0,
        })
        .collect()
}

/// Build DefenceView list from the engine-owned batteries.
fn build_defences(defences: &[Defence]) -> Vec<DefenceView> {
    defences
        .iter()
        .map(|defence| DefenceView {
            kind: defence.kind,
            position: defence.position,
            reload_remaining: defence.reload_remaining,
        })
        .collect()
}
