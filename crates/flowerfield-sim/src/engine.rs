//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, samples per-frame input,
//! runs all systems in a fixed order, and produces `FrameSnapshot`s.
//! Completely headless (no window or GL dependency), enabling deterministic
//! testing.

use glam::{Mat4, Vec3};
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flowerfield_core::components::{Body, Enemy, Fireball};
use flowerfield_core::constants::{FLOOR_DROP, FLOOR_SCALE};
use flowerfield_core::events::GameEvent;
use flowerfield_core::input::{ButtonState, FrameInput};
use flowerfield_core::state::{DrawCall, FrameSnapshot, MeshId, Palette};
use flowerfield_core::types::FrameTime;

use crate::spawn;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input script = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all frame state.
pub struct SimulationEngine {
    world: World,
    time: FrameTime,
    rng: ChaCha8Rng,
    last_now_secs: Option<f64>,
    prev_trigger: ButtonState,
    floor_anchor: Option<Vec3>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: FrameTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            last_now_secs: None,
            prev_trigger: ButtonState::Released,
            floor_anchor: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot.
    ///
    /// The step order is a behavioral contract: fire trigger, cull, fireball
    /// draw + integrate, enemy population top-up, enemy draw, collision
    /// pass, fireball removal, mood tick + departures. Fireball draws use
    /// the pre-move transform while collisions see the post-move position;
    /// enemies spawned this frame are drawn but sit out the collision and
    /// mood passes until next frame.
    pub fn step(&mut self, input: &FrameInput) -> FrameSnapshot {
        let delta_secs = match self.last_now_secs {
            Some(last) => input.now_secs - last,
            None => 0.0,
        };
        self.last_now_secs = Some(input.now_secs);
        self.time.advance(delta_secs);

        // The floor slab anchors below wherever the camera first wakes up.
        let floor_anchor = *self
            .floor_anchor
            .get_or_insert(input.camera.position - Vec3::Y * FLOOR_DROP);

        // 1. Fire trigger: one fireball per release-after-press.
        if self.prev_trigger == ButtonState::Pressed && input.trigger == ButtonState::Released {
            let entity = spawn::spawn_fireball(&mut self.world, &input.camera, input.now_secs);
            let position = self
                .world
                .get::<&Body>(entity)
                .map(|body| body.position)
                .unwrap_or_default();
            self.events.push(GameEvent::FireballLaunched {
                position,
                direction: input.camera.forward,
            });
        }
        self.prev_trigger = input.trigger;

        // 2. Cull fireballs past the render distance.
        systems::culling::run(
            &mut self.world,
            input.camera.position,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        let mut draws = vec![DrawCall {
            mesh: MeshId::Floor,
            transform: Mat4::from_translation(floor_anchor)
                * Mat4::from_scale(Vec3::splat(FLOOR_SCALE)),
            palette: Palette::Neutral,
        }];

        // 3. Fireball pass: record draws from the pre-move transforms, then
        //    integrate.
        for (_entity, (body, _fireball)) in self.world.query_mut::<(&Body, &Fireball)>() {
            draws.push(DrawCall {
                mesh: MeshId::Fireball,
                transform: body.model_matrix(),
                palette: Palette::Neutral,
            });
        }
        systems::motion::advance_fireballs(&mut self.world, delta_secs as f32);

        // 4. Capture the roster, then top the population up.
        let roster: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&Enemy>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        systems::population::run(
            &mut self.world,
            &mut self.rng,
            input.camera.position,
            input.now_secs,
            &mut self.events,
        );

        // 5. Enemy pass: draw everyone, palette keyed on mood.
        for (_entity, (body, enemy)) in self.world.query_mut::<(&Body, &Enemy)>() {
            draws.push(DrawCall {
                mesh: MeshId::Enemy,
                transform: body.model_matrix(),
                palette: if enemy.is_happy() {
                    Palette::Happy
                } else {
                    Palette::Neutral
                },
            });
        }

        // 6. Collision pass; a fireball marked by several enemies despawns
        //    once.
        let mut hit_fireballs =
            systems::collision::run(&mut self.world, &roster, &mut self.events);
        hit_fireballs.sort_unstable_by_key(|entity| entity.to_bits());
        hit_fireballs.dedup();
        for entity in hit_fireballs {
            let _ = self.world.despawn(entity);
        }

        // 7. Mood tick + departures.
        systems::mood::run(
            &mut self.world,
            &roster,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 8. Snapshot.
        let live_fireballs = {
            let mut query = self.world.query::<&Fireball>();
            query.iter().count() as u32
        };
        let live_enemies = {
            let mut query = self.world.query::<&Enemy>();
            query.iter().count() as u32
        };
        FrameSnapshot {
            time: self.time,
            camera: input.camera,
            draws,
            live_fireballs,
            live_enemies,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Get the current frame clock.
    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an exact position aimed at `target` (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: Vec3, target: Vec3, now_secs: f64) -> hecs::Entity {
        spawn::spawn_enemy_at(&mut self.world, position, target, now_secs)
    }

    /// Count live fireballs (for tests).
    #[cfg(test)]
    pub fn fireball_count(&self) -> usize {
        let mut query = self.world.query::<&Fireball>();
        query.iter().count()
    }

    /// Count live enemies (for tests).
    #[cfg(test)]
    pub fn enemy_count(&self) -> usize {
        let mut query = self.world.query::<&Enemy>();
        query.iter().count()
    }
}
