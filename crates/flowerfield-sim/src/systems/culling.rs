//! Projectile culling: expires fireballs that drifted past the render
//! distance.

use glam::Vec3;
use hecs::{Entity, World};

use flowerfield_core::components::{Body, Fireball};
use flowerfield_core::constants::RENDER_DISTANCE;
use flowerfield_core::events::GameEvent;

/// Despawn every fireball farther than RENDER_DISTANCE from the current
/// camera position. Collects first, then despawns, so adjacent qualifying
/// projectiles are all removed in the same frame.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(
    world: &mut World,
    camera_position: Vec3,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, (body, _fireball)) in world.query_mut::<(&Body, &Fireball)>() {
        let distance = body.position.distance(camera_position);
        if distance > RENDER_DISTANCE {
            despawn_buffer.push(entity);
            events.push(GameEvent::FireballExpired { distance });
        }
    }

    for entity in despawn_buffer.drain(..) {
        tracing::debug!(?entity, "fireball expired");
        let _ = world.despawn(entity);
    }
}
