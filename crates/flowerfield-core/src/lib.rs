//! Core types and definitions for the FLOWERFIELD shooting range.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, per-frame input, draw-list snapshots, events, and constants.
//! It has no dependency on any ECS or rendering framework.

pub mod components;
pub mod constants;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
