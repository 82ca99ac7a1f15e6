//! Simulation constants and tuning parameters.

use glam::Vec3;

// --- Fireballs ---

/// Projectile speed (units per second).
pub const FIREBALL_SPEED: f32 = 10.0;

/// Projectile sphere radius.
pub const FIREBALL_RADIUS: f32 = 0.5;

/// Extra muzzle offset beyond the radius, so a fresh projectile starts
/// clear of the camera.
pub const MUZZLE_CLEARANCE: f32 = 3.0;

/// Projectiles farther than this from the camera are expired.
pub const RENDER_DISTANCE: f32 = 70.0;

// --- Enemies ---

/// Enemy cube uniform scale.
pub const ENEMY_RADIUS: f32 = 1.0;

/// Drift speed along the frozen heading (units per second).
pub const ENEMY_DRIFT_SPEED: f32 = 0.1;

/// Horizontal half-extent of the spawn box around the camera; also the
/// vertical span of the spawn altitude band.
pub const ENEMY_SPAWN_HALF_EXTENT: f32 = 5.0;

/// Lowest spawn altitude.
pub const ENEMY_MIN_ALTITUDE: f32 = 2.0;

/// Live-enemy count the population system tops up to.
pub const TARGET_ENEMY_COUNT: usize = 3;

/// An enemy departs once its mood counter exceeds this.
pub const MAX_HAPPY_TIME: u32 = 250;

// --- Collision probe ---

/// Center-to-center distance below which a hit registers regardless of
/// corner geometry.
pub const INTER_DISTANCE: f32 = 1.0;

/// Corner offsets probed on the enemy cube: four tetrahedral corners of the
/// unit cube, used unscaled and unrotated. A coarse stand-in for the full
/// eight-corner box.
pub const CUBE_PROBE_OFFSETS: [Vec3; 4] = [
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Interpolation samples per ordered corner pair (alpha = 0.0, 0.1, .. 0.9).
pub const EDGE_SAMPLE_COUNT: usize = 10;

// --- Scenery ---

/// The floor slab sits this far below the camera's first-frame position.
pub const FLOOR_DROP: f32 = 5.0;

/// Uniform scale applied to the floor slab mesh.
pub const FLOOR_SCALE: f32 = 5.0;
