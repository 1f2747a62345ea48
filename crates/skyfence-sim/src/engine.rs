//! Simulation engine — the core of the run.
//!
//! `SimulationEngine` owns the hecs ECS world, the batteries and
//! generators built from the scenario, and the run statistics. It runs
//! all systems in a fixed per-frame order and produces `WorldSnapshot`s.
//! Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyfence_core::state::{RunReport, WorldSnapshot};
use skyfence_core::types::SimTime;

#[cfg(test)]
use skyfence_core::components::{Missile, Position, Projectile, Velocity};
#[cfg(test)]
use skyfence_core::types::Vec2;

use crate::defence::Defence;
use crate::generator::MissileGenerator;
use crate::scenario::Scenario;
use crate::spawner::Spawner;
use crate::systems;
use crate::tracker::Tracker;

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    /// Seconds per frame, `1 / frame_rate`.
    dt: f64,
    /// Total frames in the run, `floor(simulation_time * frame_rate)`.
    frames_total: u64,
    target_radius: f64,
    spawner: Spawner,
    defences: Vec<Defence>,
    generators: Vec<MissileGenerator>,
    tracker: Tracker,
    rng: ChaCha8Rng,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Build an engine from a validated scenario.
    ///
    /// Bullet batteries are placed before seeker batteries, and
    /// ballistic generators before boost generators; this ordering
    /// fixes the random-draw sequence for a given seed.
    pub fn new(scenario: &Scenario) -> Self {
        let settings = &scenario.settings;

        let mut defences = Vec::new();
        defences.extend(scenario.bullet_defences.iter().map(Defence::bullet));
        defences.extend(scenario.seeker_defences.iter().map(Defence::seeker));

        let mut generators = Vec::new();
        generators.extend(
            scenario
                .ballistic_generators
                .iter()
                .map(MissileGenerator::ballistic),
        );
        generators.extend(scenario.boost_generators.iter().map(MissileGenerator::boost));

        let frames_total = (settings.simulation_time * settings.frame_rate) as u64;
        log::info!(
            "engine ready: {} batteries, {} generators, {} frames at {}Hz, seed {}",
            defences.len(),
            generators.len(),
            frames_total,
            settings.frame_rate,
            settings.seed
        );

        Self {
            world: World::new(),
            time: SimTime::default(),
            dt: 1.0 / settings.frame_rate,
            frames_total,
            target_radius: settings.target_radius,
            spawner: Spawner::new(settings),
            defences,
            generators,
            tracker: Tracker::default(),
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one frame.
    pub fn update(&mut self) {
        self.run_systems();
        self.time.advance(self.dt);
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn step(&mut self) -> WorldSnapshot {
        self.update();
        self.snapshot()
    }

    /// Run every remaining frame of the scenario.
    pub fn run(&mut self) {
        while !self.complete() {
            self.update();
        }
    }

    /// Whether the scenario's frame budget has been spent.
    pub fn complete(&self) -> bool {
        self.time.frame >= self.frames_total
    }

    /// Build a snapshot of the current world state.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.defences, &self.time)
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Seconds per frame.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Total frames the scenario runs for.
    pub fn frames_total(&self) -> u64 {
        self.frames_total
    }

    /// Run statistics accumulated so far.
    pub fn report(&self) -> &RunReport {
        self.tracker.report()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Projectile resolution (hits, misses, stale targets)
        systems::intercept::run(
            &mut self.world,
            &mut self.rng,
            &mut self.tracker,
            &mut self.despawn_buffer,
            self.dt,
        );
        // 2. Missile flight and ground impact
        systems::missile_flight::run(
            &mut self.world,
            &mut self.tracker,
            &mut self.despawn_buffer,
            self.dt,
            self.target_radius,
        );
        // 3. Battery fire control
        systems::fire_control::run(
            &mut self.world,
            &mut self.defences,
            &mut self.rng,
            &mut self.tracker,
            self.dt,
        );
        // 4. New arrivals
        systems::arrivals::run(
            &mut self.world,
            &self.generators,
            &self.spawner,
            &mut self.rng,
            &mut self.tracker,
            self.dt,
        );
    }

    /// Spawn a missile directly (for tests).
    #[cfg(test)]
    pub fn spawn_missile(
        &mut self,
        missile: Missile,
        position: Vec2,
        velocity: Vec2,
    ) -> hecs::Entity {
        self.world
            .spawn((missile, Position(position), Velocity(velocity)))
    }

    /// Spawn a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_projectile(
        &mut self,
        projectile: Projectile,
        position: Vec2,
        velocity: Vec2,
    ) -> hecs::Entity {
        self.world
            .spawn((projectile, Position(position), Velocity(velocity)))
    }

    /// Get a read-only reference to the batteries (for tests).
    #[cfg(test)]
    pub fn defences(&self) -> &[Defence] {
        &self.defences
    }
}
