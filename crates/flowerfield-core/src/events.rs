//! Events emitted by the simulation for frontend feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Discrete happenings drained into each frame's snapshot; frontends use
/// these for sound cues and HUD flashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A fireball left the muzzle.
    FireballLaunched { position: Vec3, direction: Vec3 },
    /// A fireball drifted past the render distance and was expired.
    FireballExpired { distance: f32 },
    /// A new enemy materialized.
    EnemySpawned { position: Vec3 },
    /// A fireball connected; the enemy's mood counter after the hit.
    EnemyHit { happy_time: u32 },
    /// An enemy ran out its happy clock and left the field.
    EnemyDeparted { happy_time: u32 },
}
