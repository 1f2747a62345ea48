//! Core types and definitions for the skyfence simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! math types, ECS components, scenario configuration, snapshot views,
//! and constants. It has no dependency on the engine or any runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod state;
pub mod types;
