//! Ground batteries and their firing behavior.

use skyfence_core::components::{Position, Projectile, ProjectileKind, Velocity};
use skyfence_core::config::{BulletDefenceConfig, SeekerDefenceConfig};
use skyfence_core::types::Vec2;

use crate::guidance;

/// A ground battery. Built once from configuration at simulation
/// start; persists for the whole run.
#[derive(Debug, Clone)]
pub struct Defence {
    /// The round this battery fires, with its kill parameters.
    pub kind: ProjectileKind,
    /// Fixed position on the ground line.
    pub position: Vec2,
    /// Seconds between shots.
    pub reload_time: f64,
    /// Muzzle speed of fired rounds.
    pub projectile_speed: f64,
    /// Detection range. Only missiles closer than this are engaged.
    pub range: f64,
    /// Seconds until the next shot is allowed. Zero or below means
    /// ready to fire.
    pub reload_remaining: f64,
}

impl Defence {
    pub fn bullet(cfg: &BulletDefenceConfig) -> Self {
        Self {
            kind: ProjectileKind::Bullet {
                accuracy: cfg.accuracy,
            },
            position: Vec2::new(cfg.location_x, 0.0),
            reload_time: cfg.reload_time,
            projectile_speed: cfg.projectile_speed,
            range: cfg.range,
            reload_remaining: 0.0,
        }
    }

    pub fn seeker(cfg: &SeekerDefenceConfig) -> Self {
        Self {
            kind: ProjectileKind::Seeker {
                explosion_radius: cfg.explosion_radius,
            },
            position: Vec2::new(cfg.location_x, 0.0),
            reload_time: cfg.reload_time,
            projectile_speed: cfg.projectile_speed,
            range: cfg.range,
            reload_remaining: 0.0,
        }
    }

    /// Whether the battery may fire this frame.
    pub fn ready(&self) -> bool {
        self.reload_remaining <= 0.0
    }

    /// Build the component bundle for one round fired at the given
    /// target.
    ///
    /// Bullets lead the target with the interception solver; seekers
    /// launch straight at the target's current position and correct
    /// in flight. Either way the round leaves at `projectile_speed`.
    pub fn fire(
        &self,
        target: hecs::Entity,
        target_pos: Vec2,
        target_vel: Vec2,
    ) -> (Projectile, Position, Velocity) {
        let mut velocity = match self.kind {
            ProjectileKind::Bullet { .. } => guidance::intercept_velocity(
                target_pos,
                target_vel,
                self.position,
                self.projectile_speed,
            ),
            ProjectileKind::Seeker { .. } => target_pos - self.position,
        };
        velocity.rescale(self.projectile_speed);

        let projectile = Projectile {
            kind: self.kind,
            target,
        };
        (projectile, Position(self.position), Velocity(velocity))
    }
}
