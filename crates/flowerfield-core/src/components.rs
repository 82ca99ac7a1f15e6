//! ECS components for the range entities.
//!
//! Components are plain data structs; frame logic lives in the sim crate's
//! systems.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Shared movable-object state: where an entity sits and how its mesh is
/// oriented and scaled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// World-space position.
    pub position: Vec3,
    /// Rotation axis. Invariant: unit length.
    pub axis: Vec3,
    /// Rotation angle around `axis`, in radians.
    pub angle: f32,
    /// Uniform scale.
    pub radius: f32,
}

impl Body {
    /// Model transform: scale by `radius`, rotate by `angle` around `axis`,
    /// translate to `position`, composed in that fixed order.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_axis_angle(self.axis, self.angle)
            * Mat4::from_scale(Vec3::splat(self.radius))
    }
}

/// A player-fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fireball {
    /// Clock reading at launch.
    pub born_at_secs: f64,
    /// Flight direction, captured once from the camera forward at launch.
    pub direction: Vec3,
}

/// A cube target drifting along a frozen heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Clock reading at spawn.
    pub born_at_secs: f64,
    /// Heading toward the camera's position at spawn time. Never recomputed,
    /// so the enemy keeps aiming at its spawn-time target point.
    pub direction: Vec3,
    /// Mood counter: zero until first hit, then climbing every frame until
    /// the enemy departs.
    pub happy_time: u32,
}

impl Enemy {
    /// Whether this enemy has been hit at least once.
    pub fn is_happy(&self) -> bool {
        self.happy_time != 0
    }
}
