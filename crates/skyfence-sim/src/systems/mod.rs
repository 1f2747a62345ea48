//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only) plus whatever engine state they need. They do not own
//! state of their own.

pub mod arrivals;
pub mod fire_control;
pub mod intercept;
pub mod missile_flight;
pub mod snapshot;
