//! Per-frame input sampled from the windowing/camera collaborators.
//!
//! The engine is fed one `FrameInput` per frame and owns no clock or input
//! device of its own, which keeps runs fully scriptable.

use serde::{Deserialize, Serialize};

use crate::types::CameraRig;

/// Sampled state of the fire button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// Everything the simulation consumes for one frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameInput {
    /// Monotonic seconds reading; delta time is derived from consecutive
    /// values (the first frame's delta is zero).
    pub now_secs: f64,
    /// Camera pose for this frame.
    pub camera: CameraRig,
    /// Fire button state; a Pressed -> Released transition across frames
    /// launches a fireball.
    pub trigger: ButtonState,
}
