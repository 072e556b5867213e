//! Planar (strafe/forward) velocity integration.

use glam::{Mat4, Vec3};

use crate::config::{ControllerConfig, SpeedModifier};
use crate::math::clamp_range;

/// Planar velocity accumulator in camera-relative axes (units/s)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarVelocity {
    /// Positive moves right
    pub strafe: f32,
    /// Positive moves toward the view direction
    pub forward: f32,
}

impl PlanarVelocity {
    pub const ZERO: Self = Self {
        strafe: 0.0,
        forward: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.strafe == 0.0 && self.forward == 0.0
    }
}

/// Directional input for one tick; each axis is -1, 0 or 1
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    pub strafe: f32,
    pub forward: f32,
    pub modifier: SpeedModifier,
}

impl MovementIntent {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    pub fn from_keys(forward: bool, backward: bool, left: bool, right: bool, modifier: SpeedModifier) -> Self {
        Self {
            strafe: Self::to_direction(right, left),
            forward: Self::to_direction(forward, backward),
            modifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    pub velocity: PlanarVelocity,
    /// An axis decayed below the low-speed threshold and snapped to rest
    pub stopped: bool,
}

/// One axis of the accumulator. Returns the new value and whether it snapped
/// to zero this tick.
fn integrate_axis(value: f32, direction: f32, cap: f32, increment: f32, config: &ControllerConfig) -> (f32, bool) {
    if direction != 0.0 {
        return (clamp_range(value + direction * increment, cap), false);
    }

    if value.abs() < config.low_speed_threshold {
        return (value, false);
    }

    let decayed = value * config.drag.movement;
    if decayed.abs() < config.low_speed_threshold {
        (0.0, true)
    } else {
        (decayed, false)
    }
}

/// Advance the planar velocity accumulator by one tick
pub fn integrate(velocity: PlanarVelocity, intent: MovementIntent, config: &ControllerConfig) -> MovementStep {
    let cap = config.speed_cap_for(intent.modifier);
    let increment = cap * config.acceleration_ratio;

    let (strafe, strafe_stopped) = integrate_axis(velocity.strafe, intent.strafe, cap, increment, config);
    let (forward, forward_stopped) = integrate_axis(velocity.forward, intent.forward, cap, increment, config);

    MovementStep {
        velocity: PlanarVelocity { strafe, forward },
        stopped: strafe_stopped || forward_stopped,
    }
}

/// Below this squared length the flattened view axis has no usable heading
const FLAT_AXIS_EPSILON: f32 = 1e-6;

/// Horizontal (right, ahead) unit axes of a camera-to-world transform.
/// `None` when the camera looks straight up or down.
pub fn planar_axes(world_matrix: &Mat4) -> Option<(Vec3, Vec3)> {
    let back = world_matrix.z_axis.truncate();
    let flat_back = Vec3::new(back.x, 0.0, back.z);
    if flat_back.length_squared() < FLAT_AXIS_EPSILON {
        return None;
    }
    let flat_back = flat_back.normalize();
    let right = Vec3::Y.cross(flat_back).normalize();
    Some((right, -flat_back))
}

/// World-space planar displacement for this tick
pub fn displacement(velocity: PlanarVelocity, world_matrix: &Mat4, config: &ControllerConfig, dt: f32) -> Vec3 {
    if velocity.is_zero() {
        return Vec3::ZERO;
    }
    let Some((right, ahead)) = planar_axes(world_matrix) else {
        return Vec3::ZERO;
    };
    (right * velocity.strafe + ahead * velocity.forward) * config.move_speed_mult * dt
}
