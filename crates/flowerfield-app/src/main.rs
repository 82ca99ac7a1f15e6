//! Headless driver for the FLOWERFIELD range.
//!
//! Scripts a camera sweep and a fire cadence, steps the simulation on a
//! synthetic clock, and logs the events a frontend would react to. Useful
//! for smoke runs and for dumping a frame snapshot to feed a renderer.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use flowerfield_core::events::GameEvent;
use flowerfield_core::input::{ButtonState, FrameInput};
use flowerfield_core::state::FrameSnapshot;
use flowerfield_core::types::CameraRig;
use flowerfield_sim::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(author, version, about = "Flowerfield headless range driver", long_about = None)]
struct Args {
    /// RNG seed; the same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Synthetic frame rate (frames per simulated second).
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pull the trigger every N frames (0 disables firing).
    #[arg(long, default_value_t = 40)]
    fire_every: u64,

    /// Camera yaw sweep rate in degrees per second.
    #[arg(long, default_value_t = 20.0)]
    yaw_rate: f32,

    /// Camera pitch in degrees (aims up into the spawn band).
    #[arg(long, default_value_t = 25.0)]
    pitch: f32,

    /// Write the final frame snapshot to this path as JSON.
    #[arg(long)]
    snapshot_out: Option<PathBuf>,
}

/// Scripted first-person camera: parked at the origin, sweeping its aim
/// around the range at a fixed pitch.
fn scripted_camera(args: &Args, now_secs: f64) -> CameraRig {
    let yaw = (args.yaw_rate * now_secs as f32).to_radians();
    let pitch = args.pitch.to_radians();
    let forward = Vec3::new(
        yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    );
    CameraRig::new(Vec3::ZERO, forward)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut engine = SimulationEngine::new(SimConfig { seed: args.seed });

    info!(
        seed = args.seed,
        frames = args.frames,
        fps = args.fps,
        "starting range run"
    );

    let mut fired = 0u64;
    let mut expired = 0u64;
    let mut spawned = 0u64;
    let mut hits = 0u64;
    let mut departed = 0u64;

    let mut last_snapshot: Option<FrameSnapshot> = None;
    for k in 0..args.frames {
        let now_secs = k as f64 / args.fps as f64;
        let trigger = if args.fire_every != 0 && k % args.fire_every == 0 {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        };

        let snapshot = engine.step(&FrameInput {
            now_secs,
            camera: scripted_camera(&args, now_secs),
            trigger,
        });

        for event in &snapshot.events {
            match event {
                GameEvent::FireballLaunched { position, .. } => {
                    fired += 1;
                    debug!(?position, "fireball away");
                }
                GameEvent::FireballExpired { distance } => {
                    expired += 1;
                    debug!(distance, "fireball expired");
                }
                GameEvent::EnemySpawned { position } => {
                    spawned += 1;
                    debug!(?position, "enemy spawned");
                }
                GameEvent::EnemyHit { happy_time } => {
                    hits += 1;
                    info!(happy_time, "fireball hit");
                }
                GameEvent::EnemyDeparted { happy_time } => {
                    departed += 1;
                    info!(happy_time, "enemy departed");
                }
            }
        }
        last_snapshot = Some(snapshot);
    }

    info!(fired, expired, hits, spawned, departed, "range run complete");

    if let (Some(path), Some(snapshot)) = (args.snapshot_out.as_ref(), last_snapshot.as_ref()) {
        fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
        info!(path = %path.display(), "wrote final snapshot");
    }

    Ok(())
}
