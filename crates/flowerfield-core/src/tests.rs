#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::components::{Body, Enemy, Fireball};
    use crate::constants::*;
    use crate::events::GameEvent;
    use crate::input::{ButtonState, FrameInput};
    use crate::state::{DrawCall, FrameSnapshot, MeshId, Palette};
    use crate::types::{CameraRig, FrameTime};

    // ---- Transform derivation ----

    #[test]
    fn test_model_matrix_translation() {
        // Scale and rotation never displace the origin, so the composed
        // transform must map the local origin straight to `position`.
        let body = Body {
            position: Vec3::new(3.0, -2.0, 7.5),
            axis: Vec3::new(0.0, 1.0, 0.0),
            angle: 1.3,
            radius: 0.5,
        };
        let mapped = body.model_matrix().transform_point3(Vec3::ZERO);
        assert!((mapped - body.position).length() < 1e-6);
    }

    #[test]
    fn test_model_matrix_scale_rotate_translate_order() {
        // A unit X point scaled by 2, rotated 90 degrees around Y, then
        // translated: (1,0,0) -> (2,0,0) -> (0,0,-2) -> position + (0,0,-2).
        let body = Body {
            position: Vec3::new(10.0, 0.0, 0.0),
            axis: Vec3::Y,
            angle: std::f32::consts::FRAC_PI_2,
            radius: 2.0,
        };
        let mapped = body.model_matrix().transform_point3(Vec3::X);
        let expected = Vec3::new(10.0, 0.0, -2.0);
        assert!(
            (mapped - expected).length() < 1e-5,
            "expected {expected}, got {mapped}"
        );
    }

    #[test]
    fn test_model_matrix_pure() {
        let body = Body {
            position: Vec3::new(1.0, 2.0, 3.0),
            axis: Vec3::X,
            angle: 0.25,
            radius: 1.5,
        };
        let a = body.model_matrix();
        let b = body.model_matrix();
        assert_eq!(a, b, "same state must derive the same transform");
    }

    // ---- Probe offset table ----

    #[test]
    fn test_probe_offsets_are_unit_cube_corners() {
        assert_eq!(CUBE_PROBE_OFFSETS.len(), 4);
        for offset in CUBE_PROBE_OFFSETS {
            assert!((offset.length() - 3.0f32.sqrt()).abs() < 1e-6);
            for c in offset.to_array() {
                assert!(c == 1.0 || c == -1.0);
            }
        }
        // All four corners are distinct.
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(CUBE_PROBE_OFFSETS[i], CUBE_PROBE_OFFSETS[j]);
            }
        }
    }

    // ---- Frame clock ----

    #[test]
    fn test_frame_time_advance() {
        let mut time = FrameTime::default();
        for _ in 0..30 {
            time.advance(1.0 / 30.0);
        }
        assert_eq!(time.frame, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Mood flag ----

    #[test]
    fn test_enemy_is_happy() {
        let mut enemy = Enemy {
            born_at_secs: 0.0,
            direction: Vec3::NEG_Z,
            happy_time: 0,
        };
        assert!(!enemy.is_happy());
        enemy.happy_time = 1;
        assert!(enemy.is_happy());
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_frame_input_serde() {
        let input = FrameInput {
            now_secs: 1.25,
            camera: CameraRig::new(Vec3::new(0.0, 1.0, 4.0), Vec3::NEG_Z),
            trigger: ButtonState::Pressed,
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: FrameInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trigger, ButtonState::Pressed);
        assert!((back.now_secs - 1.25).abs() < 1e-12);
        assert_eq!(back.camera.position, input.camera.position);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::FireballLaunched {
                position: Vec3::new(0.0, 0.0, -3.5),
                direction: Vec3::NEG_Z,
            },
            GameEvent::FireballExpired { distance: 71.0 },
            GameEvent::EnemySpawned {
                position: Vec3::new(2.0, 4.0, -1.0),
            },
            GameEvent::EnemyHit { happy_time: 2 },
            GameEvent::EnemyDeparted { happy_time: 251 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert!(
            json.len() < 1024,
            "empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_draw_call_serde() {
        let body = Body {
            position: Vec3::new(1.0, 2.0, 3.0),
            axis: Vec3::Y,
            angle: 0.5,
            radius: ENEMY_RADIUS,
        };
        let call = DrawCall {
            mesh: MeshId::Enemy,
            transform: body.model_matrix(),
            palette: Palette::Happy,
        };
        let json = serde_json::to_string(&call).unwrap();
        let back: DrawCall = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mesh, MeshId::Enemy);
        assert_eq!(back.palette, Palette::Happy);
        assert_eq!(back.transform, call.transform);
    }

    #[test]
    fn test_fireball_spawn_offset_matches_constants() {
        // The muzzle offset the sim applies: radius + clearance = 3.5.
        let fireball = Fireball {
            born_at_secs: 0.0,
            direction: Vec3::NEG_Z,
        };
        let offset = fireball.direction * (FIREBALL_RADIUS + MUZZLE_CLEARANCE);
        assert_eq!(offset, Vec3::new(0.0, 0.0, -3.5));
    }
}
