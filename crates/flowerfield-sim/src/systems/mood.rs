//! Mood state machine: happy enemies keep getting happier, then leave.

use hecs::{Entity, World};

use flowerfield_core::components::Enemy;
use flowerfield_core::constants::MAX_HAPPY_TIME;
use flowerfield_core::events::GameEvent;

/// Tick the mood counter of every roster enemy and despawn the ones whose
/// counter passed MAX_HAPPY_TIME.
///
/// Runs after the collision pass, so a freshly hit enemy advances by two in
/// its hit frame: one from the hit, one from the tick.
pub fn run(
    world: &mut World,
    roster: &[Entity],
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for &entity in roster {
        let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
            continue;
        };
        if enemy.happy_time > 0 {
            enemy.happy_time += 1;
        }
        if enemy.happy_time > MAX_HAPPY_TIME {
            events.push(GameEvent::EnemyDeparted {
                happy_time: enemy.happy_time,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        tracing::debug!(?entity, "enemy departed");
        let _ = world.despawn(entity);
    }
}
