//! Mouse-look rotation and roll removal for a camera-to-world transform.
//!
//! The transform's columns are right (x), up (y), back (z) and translation.
//! The camera looks down its local -Z axis.

use glam::{Mat4, Vec2, Vec3};

use crate::math::snap_below;

pub const WORLD_UP: Vec3 = Vec3::Y;

/// Right axis used when the view is (nearly) parallel to world up
pub const FALLBACK_RIGHT: Vec3 = Vec3::X;

const DEGENERATE_RIGHT_EPSILON: f32 = 1e-3;

/// Look accumulator components below this are snapped to rest
pub const MOUSE_LOW_SPEED_CAP: f32 = 1e-4;

/// Rebuild the right and up axes so the right axis is horizontal.
///
/// The back axis is normalized but keeps its direction (pitch survives),
/// translation is left alone.
pub fn stabilize(world_matrix: &mut Mat4) {
    let back = world_matrix.z_axis.truncate().try_normalize().unwrap_or(Vec3::Z);

    let right = WORLD_UP.cross(back);
    let right = if right.length() < DEGENERATE_RIGHT_EPSILON {
        FALLBACK_RIGHT
    } else {
        right.normalize()
    };
    let up = back.cross(right).normalize();

    world_matrix.x_axis = right.extend(0.0);
    world_matrix.y_axis = up.extend(0.0);
    world_matrix.z_axis = back.extend(0.0);
}

/// Stabilized copy of `world_matrix`
pub fn stabilized(mut world_matrix: Mat4) -> Mat4 {
    stabilize(&mut world_matrix);
    world_matrix
}

/// Yaw/pitch accumulator with per-tick decay for look inertia
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseLook {
    /// Pending rotation in radians: x is yaw about local Y, y is pitch about local X
    pending: Vec2,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec2 {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending == Vec2::ZERO
    }

    pub fn clear(&mut self) {
        self.pending = Vec2::ZERO;
    }

    /// Add a mouse delta (pixels). Moving right or down turns right or down.
    pub fn accumulate(&mut self, delta: Vec2, mouse_look_speed: f32, invert_x: bool, invert_y: bool) {
        let invert = Vec2::new(
            if invert_x { -1.0 } else { 1.0 },
            if invert_y { -1.0 } else { 1.0 },
        );
        self.pending += delta * (-1.0 / mouse_look_speed) * invert;
    }

    /// Rotate `world_matrix` by the pending look, then decay the accumulator.
    /// Returns whether any rotation was applied.
    pub fn apply(&mut self, world_matrix: &mut Mat4, drag: f32) -> bool {
        if self.is_idle() {
            return false;
        }

        *world_matrix = *world_matrix * Mat4::from_rotation_y(self.pending.x) * Mat4::from_rotation_x(self.pending.y);

        self.pending *= drag;
        self.pending.x = snap_below(self.pending.x, MOUSE_LOW_SPEED_CAP);
        self.pending.y = snap_below(self.pending.y, MOUSE_LOW_SPEED_CAP);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn assert_orthonormal(m: &Mat4) {
        let (x, y, z) = (m.x_axis.truncate(), m.y_axis.truncate(), m.z_axis.truncate());
        assert!((x.length() - 1.0).abs() < 1e-4);
        assert!((y.length() - 1.0).abs() < 1e-4);
        assert!((z.length() - 1.0).abs() < 1e-4);
        assert!(x.dot(y).abs() < 1e-4);
        assert!(y.dot(z).abs() < 1e-4);
        assert!(z.dot(x).abs() < 1e-4);
        // Right-handed: x × y = z
        assert!((x.cross(y) - z).length() < 1e-4);
    }

    #[test]
    fn test_identity_unchanged() {
        let m = stabilized(Mat4::IDENTITY);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_removes_roll() {
        let rolled = Mat4::from_quat(Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3) * Quat::from_rotation_z(0.5));
        let m = stabilized(rolled);
        assert!(m.x_axis.y.abs() < 1e-5);
        assert_orthonormal(&m);
        // View direction preserved
        assert!((m.z_axis.truncate() - rolled.z_axis.truncate()).length() < 1e-5);
    }

    #[test]
    fn test_translation_untouched() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_rotation_z(0.4);
        let s = stabilized(m);
        assert_eq!(s.w_axis, m.w_axis);
    }

    #[test]
    fn test_looking_straight_up_uses_fallback() {
        let m = stabilized(Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2) * Mat4::from_rotation_z(0.3));
        assert!(m.x_axis.y.abs() < 1e-6);
        assert!(m.x_axis.truncate().is_finite());
        assert!(m.y_axis.truncate().is_finite());
        assert_orthonormal(&m);
    }

    #[test]
    fn test_near_vertical_stays_level() {
        let m = stabilized(Mat4::from_rotation_x(1.5707) * Mat4::from_rotation_z(1.0));
        assert!(m.x_axis.y.abs() < 1e-5);
        assert_orthonormal(&m);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut look = MouseLook::new();
        let mut m = Mat4::IDENTITY;
        look.accumulate(Vec2::new(50.0, 0.0), 500.0, false, false);
        assert!(look.apply(&mut m, 0.0));
        let forward = -m.z_axis.truncate();
        assert!(forward.x > 0.0, "Positive mouse x should turn the view right");
        assert!(look.is_idle());
    }

    #[test]
    fn test_invert_y() {
        let mut look = MouseLook::new();
        look.accumulate(Vec2::new(0.0, 10.0), 500.0, false, true);
        assert!(look.pending().y > 0.0);
    }

    #[test]
    fn test_drag_glides_then_stops() {
        let mut look = MouseLook::new();
        let mut m = Mat4::IDENTITY;
        look.accumulate(Vec2::new(100.0, 0.0), 500.0, false, false);
        let mut applied = 0;
        while look.apply(&mut m, 0.5) {
            applied += 1;
            assert!(applied < 100);
        }
        assert!(applied > 1);
        assert!(look.is_idle());
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut look = MouseLook::new();
        let mut m = Mat4::IDENTITY;
        assert!(!look.apply(&mut m, 0.5));
        assert_eq!(m, Mat4::IDENTITY);
    }
}
