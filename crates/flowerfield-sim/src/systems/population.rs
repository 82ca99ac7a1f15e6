//! Enemy population control: keeps the range stocked with targets.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use flowerfield_core::components::{Body, Enemy};
use flowerfield_core::constants::TARGET_ENEMY_COUNT;
use flowerfield_core::events::GameEvent;

use crate::spawn;

/// Top the live-enemy count back up toward TARGET_ENEMY_COUNT, spawning at
/// most one enemy per frame even when the deficit is larger.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    camera_position: Vec3,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) -> Option<hecs::Entity> {
    let live = {
        let mut query = world.query::<&Enemy>();
        query.iter().count()
    };
    if live >= TARGET_ENEMY_COUNT {
        return None;
    }

    let entity = spawn::spawn_enemy(world, rng, camera_position, now_secs);
    let position = world
        .get::<&Body>(entity)
        .map(|body| body.position)
        .unwrap_or_default();
    events.push(GameEvent::EnemySpawned { position });
    Some(entity)
}
