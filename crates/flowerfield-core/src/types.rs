//! Fundamental simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Frame clock driven by the caller's monotonic time source.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Current frame number (increments by 1 each frame).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl FrameTime {
    /// Advance by one frame of `delta_secs`.
    pub fn advance(&mut self, delta_secs: f64) {
        self.frame += 1;
        self.elapsed_secs += delta_secs;
    }
}

/// The camera pose sampled once per frame from the input/camera controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraRig {
    /// Eye position in world space.
    pub position: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
}

impl CameraRig {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
        }
    }
}
