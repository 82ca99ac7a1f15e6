//! Sphere-vs-cube collision: the probe and the per-frame enemy x fireball
//! pass.

use glam::Vec3;
use hecs::{Entity, World};

use flowerfield_core::components::{Body, Enemy, Fireball};
use flowerfield_core::constants::{CUBE_PROBE_OFFSETS, EDGE_SAMPLE_COUNT, INTER_DISTANCE};
use flowerfield_core::events::GameEvent;

/// Test a sphere against a cube-shaped target, all in world space.
///
/// The cube is approximated by `corner_offsets` (four of its eight corners)
/// taken unscaled and unrotated, plus sampled points along every ordered
/// corner pair. Three checks, any one of which registers a hit:
/// 1. center-to-center distance below INTER_DISTANCE;
/// 2. a corner inside the sphere;
/// 3. an interpolated sample `alpha * a + (1 - alpha) * b` inside the
///    sphere, for alpha in {0.0, 0.1, .., 0.9}.
///
/// Pure function of its arguments; returns on the first triggering check.
pub fn probe(
    sphere_center: Vec3,
    sphere_radius: f32,
    cube_center: Vec3,
    corner_offsets: &[Vec3],
) -> bool {
    if sphere_center.distance(cube_center) < INTER_DISTANCE {
        return true;
    }

    for &corner in corner_offsets {
        if sphere_center.distance(cube_center + corner) < sphere_radius {
            return true;
        }
        for &other in corner_offsets {
            for step in 0..EDGE_SAMPLE_COUNT {
                let alpha = step as f32 / EDGE_SAMPLE_COUNT as f32;
                let sample = corner * alpha + other * (1.0 - alpha);
                if sphere_center.distance(cube_center + sample) < sphere_radius {
                    return true;
                }
            }
        }
    }

    false
}

/// Run the collision pass: every roster enemy against every live fireball.
///
/// Returns the fireballs to remove, one entry per hit: a fireball hitting
/// several enemies appears several times (the caller deduplicates before
/// despawning), and an enemy overlapped by several fireballs has its mood
/// counter bumped once per fireball.
pub fn run(world: &mut World, roster: &[Entity], events: &mut Vec<GameEvent>) -> Vec<Entity> {
    // Snapshot fireball positions to avoid borrow conflicts with hecs.
    let fireballs: Vec<(Entity, Vec3, f32)> = world
        .query::<(&Body, &Fireball)>()
        .iter()
        .map(|(entity, (body, _fireball))| (entity, body.position, body.radius))
        .collect();

    let mut hit_fireballs = Vec::new();

    for &enemy_entity in roster {
        let enemy_position = match world.get::<&Body>(enemy_entity) {
            Ok(body) => body.position,
            Err(_) => continue,
        };

        for &(fireball_entity, center, radius) in &fireballs {
            if !probe(center, radius, enemy_position, &CUBE_PROBE_OFFSETS) {
                continue;
            }

            hit_fireballs.push(fireball_entity);
            if let Ok(mut enemy) = world.get::<&mut Enemy>(enemy_entity) {
                enemy.happy_time += 1;
                tracing::debug!(
                    ?fireball_entity,
                    ?enemy_entity,
                    happy_time = enemy.happy_time,
                    "fireball hit"
                );
                events.push(GameEvent::EnemyHit {
                    happy_time: enemy.happy_time,
                });
            }
        }
    }

    hit_fireballs
}
