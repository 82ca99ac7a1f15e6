//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are free functions that take `&mut World` plus explicit state
//! (rng, despawn buffer, event sink). They do not own state — all state
//! lives in components or on the engine.

pub mod collision;
pub mod culling;
pub mod mood;
pub mod motion;
pub mod population;
