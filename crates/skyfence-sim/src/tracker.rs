//! Run statistics accumulation.

use std::collections::BTreeMap;

use skyfence_core::components::{MissileKind, ProjectileKind};
use skyfence_core::state::RunReport;

/// Accumulates launch, fire, hit, and intercept counts for one run.
///
/// Mutated only by the engine's systems; read once at run completion.
#[derive(Debug, Default)]
pub struct Tracker {
    report: RunReport,
}

impl Tracker {
    pub fn record_launch(&mut self, kind: MissileKind) {
        bump(&mut self.report.launches, missile_label(kind));
    }

    pub fn record_fire(&mut self, kind: ProjectileKind) {
        bump(&mut self.report.fires, projectile_label(kind));
    }

    /// A missile reached the protected target.
    pub fn record_target_hit(&mut self, kind: MissileKind, damage: f64) {
        bump(&mut self.report.target_hits, missile_label(kind));
        self.report.damage_received += damage;
    }

    /// A missile was destroyed in flight.
    pub fn record_intercept(&mut self, kind: MissileKind) {
        bump(&mut self.report.intercepts, missile_label(kind));
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }
}

fn bump(counter: &mut BTreeMap<String, u64>, label: &str) {
    *counter.entry(label.to_string()).or_insert(0) += 1;
}

/// Report key for a missile variant.
fn missile_label(kind: MissileKind) -> &'static str {
    match kind {
        MissileKind::Ballistic => "ballistic missile",
        MissileKind::Boost(_) => "boost missile",
    }
}

/// Report key for a projectile variant.
fn projectile_label(kind: ProjectileKind) -> &'static str {
    match kind {
        ProjectileKind::Bullet { .. } => "bullet",
        ProjectileKind::Seeker { .. } => "seeker",
    }
}
