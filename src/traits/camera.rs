use glam::{Mat4, Vec3};
use serde::Serialize;

use super::controller::InputSource;

/// Classification of what a tick did to the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CameraUpdateResult {
    Unchanged,
    Changed,
    /// Discrete event, e.g. motion came to a full stop or the camera was reset
    ImportantChange,
}

impl CameraUpdateResult {
    pub fn is_changed(self) -> bool {
        self != CameraUpdateResult::Unchanged
    }
}

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance the camera by `delta_time` seconds using the sampled input
    fn update(&mut self, input: &dyn InputSource, delta_time: f32) -> CameraUpdateResult;

    /// Camera-to-world transform
    fn world_matrix(&self) -> Mat4;

    /// World-to-camera transform for rendering
    fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Get the camera position in world space
    fn position(&self) -> Vec3 {
        self.world_matrix().w_axis.truncate()
    }

    /// Direction the camera looks at (down its local -Z axis)
    fn forward(&self) -> Vec3 {
        -self.world_matrix().z_axis.truncate()
    }

    /// Return the camera to its initial state
    fn reset(&mut self);
}
