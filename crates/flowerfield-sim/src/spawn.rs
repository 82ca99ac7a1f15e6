//! Entity spawn factories.
//!
//! Creates fireball and enemy entities with their component bundles. All
//! randomness flows through the injected rng so runs are reproducible.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use flowerfield_core::components::{Body, Enemy, Fireball};
use flowerfield_core::constants::*;
use flowerfield_core::types::CameraRig;

/// Spawn a fireball just ahead of the camera, flying along the camera's
/// current forward vector. The direction is captured once and never
/// re-aimed.
pub fn spawn_fireball(world: &mut World, camera: &CameraRig, now_secs: f64) -> hecs::Entity {
    let direction = camera.forward;
    let body = Body {
        position: camera.position + direction * (FIREBALL_RADIUS + MUZZLE_CLEARANCE),
        axis: Vec3::Y,
        angle: 0.0,
        radius: FIREBALL_RADIUS,
    };

    tracing::debug!(position = ?body.position, "fireball launched");

    world.spawn((
        body,
        Fireball {
            born_at_secs: now_secs,
            direction,
        },
    ))
}

/// Spawn an enemy at a random spot in the box around the camera: horizontal
/// coordinates within the spawn half-extent of the camera, altitude in an
/// absolute band above the ground. The heading toward the camera's position
/// is frozen at spawn time.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    camera_position: Vec3,
    now_secs: f64,
) -> hecs::Entity {
    let half = ENEMY_SPAWN_HALF_EXTENT;
    let position = Vec3::new(
        camera_position.x + rng.gen_range(-half..half),
        rng.gen_range(ENEMY_MIN_ALTITUDE..ENEMY_MIN_ALTITUDE + half),
        camera_position.z + rng.gen_range(-half..half),
    );

    let axis = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>())
        .try_normalize()
        .unwrap_or(Vec3::Y);
    let angle = rng.gen_range(0.0f32..360.0).to_radians();

    tracing::debug!(?position, "enemy spawned");

    world.spawn((
        Body {
            position,
            axis,
            angle,
            radius: ENEMY_RADIUS,
        },
        Enemy {
            born_at_secs: now_secs,
            direction: camera_position - position,
            happy_time: 0,
        },
    ))
}

/// Spawn an enemy at an exact position with a frozen heading toward
/// `target` (for tests that need deterministic placement).
#[cfg(test)]
pub fn spawn_enemy_at(
    world: &mut World,
    position: Vec3,
    target: Vec3,
    now_secs: f64,
) -> hecs::Entity {
    world.spawn((
        Body {
            position,
            axis: Vec3::Y,
            angle: 0.0,
            radius: ENEMY_RADIUS,
        },
        Enemy {
            born_at_secs: now_secs,
            direction: target - position,
            happy_time: 0,
        },
    ))
}
