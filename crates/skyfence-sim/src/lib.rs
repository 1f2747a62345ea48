//! Simulation engine for skyfence.
//!
//! Owns the hecs ECS world, runs systems in a fixed per-frame order,
//! and produces world snapshots plus an end-of-run report.

pub mod defence;
pub mod engine;
pub mod generator;
pub mod guidance;
pub mod scenario;
pub mod spawner;
pub mod systems;
pub mod tracker;

pub use engine::SimulationEngine;
pub use skyfence_core as core;
