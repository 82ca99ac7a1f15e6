//! Frame snapshot — the complete drawable state handed to the frontend
//! each frame.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::{CameraRig, FrameTime};

/// Which mesh a draw call refers to. The frontend owns the actual geometry
/// and textures; the simulation only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshId {
    Floor,
    Fireball,
    Enemy,
}

/// Color scheme for a draw call. Enemies switch to `Happy` once hit; the
/// floor and fireballs always draw `Neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    #[default]
    Neutral,
    Happy,
}

/// One "draw mesh M with transform T and palette C" instruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DrawCall {
    pub mesh: MeshId,
    pub transform: Mat4,
    pub palette: Palette,
}

/// Everything the frontend needs to present one frame.
///
/// Draw order within a frame is floor, then fireballs, then enemies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub camera: CameraRig,
    pub draws: Vec<DrawCall>,
    pub live_fireballs: u32,
    pub live_enemies: u32,
    pub events: Vec<GameEvent>,
}
