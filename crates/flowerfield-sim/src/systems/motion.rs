//! Kinematic integration: position += direction * speed * dt.

use hecs::World;

use flowerfield_core::components::{Body, Enemy, Fireball};
use flowerfield_core::constants::{ENEMY_DRIFT_SPEED, FIREBALL_SPEED};

/// Advance every fireball along its captured direction. Called once per
/// frame, after the draw transforms are recorded and before the collision
/// pass, so hits are tested against post-move positions.
pub fn advance_fireballs(world: &mut World, delta_secs: f32) {
    for (_entity, (body, fireball)) in world.query_mut::<(&mut Body, &Fireball)>() {
        body.position += fireball.direction * (FIREBALL_SPEED * delta_secs);
    }
}

/// Drift every enemy along its frozen heading.
///
/// The frame driver keeps enemies parked and never calls this; it exists as
/// an opt-in for frontends that want moving targets, with the same frozen
/// heading an enemy was born with.
pub fn drift_enemies(world: &mut World, delta_secs: f32) {
    for (_entity, (body, enemy)) in world.query_mut::<(&mut Body, &Enemy)>() {
        body.position += enemy.direction * (ENEMY_DRIFT_SPEED * delta_secs);
    }
}
