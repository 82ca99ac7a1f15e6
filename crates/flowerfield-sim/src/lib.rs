//! Simulation engine for FLOWERFIELD.
//!
//! Owns the hecs ECS world, advances it one frame per `step`, and produces
//! FrameSnapshots (draw list + events) for the frontend.

pub mod engine;
pub mod spawn;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use flowerfield_core as core;
