use glam::{Vec2, Vec3};

/// Triangles whose projected area falls below this are treated as degenerate
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Barycentric weights of a point relative to a triangle (v0, v1, v2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub a: f32, // Weight of v0
    pub b: f32, // Weight of v1
    pub c: f32, // Weight of v2
}

impl Barycentric {
    /// True when the point lies inside the triangle or on its boundary
    pub fn contains(&self) -> bool {
        self.a >= 0.0 && self.b >= 0.0 && self.c >= 0.0
    }

    /// Interpolate a per-vertex scalar using these weights
    pub fn interpolate(&self, s0: f32, s1: f32, s2: f32) -> f32 {
        self.a * s0 + self.b * s1 + self.c * s2
    }
}

/// Barycentric coordinates of `point` (x, z) against the triangle's
/// horizontal (x, z) projection. Returns `None` for degenerate projections,
/// e.g. vertical walls or collinear vertices.
pub fn horizontal_barycentric(point: Vec2, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Barycentric> {
    let (x, z) = (point.x, point.y);
    let (x0, z0) = (v0.x, v0.z);
    let (x1, z1) = (v1.x, v1.z);
    let (x2, z2) = (v2.x, v2.z);

    let denom = (z1 - z2) * (x0 - x2) + (x2 - x1) * (z0 - z2);
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let a = ((z1 - z2) * (x - x2) + (x2 - x1) * (z - z2)) / denom;
    let b = ((z2 - z0) * (x - x2) + (x0 - x2) * (z - z2)) / denom;

    Some(Barycentric { a, b, c: 1.0 - a - b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_triangle() -> (Vec3, Vec3, Vec3) {
        (
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        )
    }

    #[test]
    fn test_weights_sum_to_one() {
        let (v0, v1, v2) = floor_triangle();
        let w = horizontal_barycentric(Vec2::new(2.0, 3.0), v0, v1, v2).unwrap();
        assert!((w.a + w.b + w.c - 1.0).abs() < 1e-5);
        assert!(w.contains());
    }

    #[test]
    fn test_vertex_has_full_weight() {
        let (v0, v1, v2) = floor_triangle();
        let w = horizontal_barycentric(Vec2::new(10.0, 0.0), v0, v1, v2).unwrap();
        assert!((w.b - 1.0).abs() < 1e-5);
        assert!(w.a.abs() < 1e-5);
        assert!(w.c.abs() < 1e-5);
    }

    #[test]
    fn test_outside_point() {
        let (v0, v1, v2) = floor_triangle();
        let w = horizontal_barycentric(Vec2::new(8.0, 8.0), v0, v1, v2).unwrap();
        assert!(!w.contains());
    }

    #[test]
    fn test_vertical_triangle_is_degenerate() {
        // A wall: all three vertices share the same x, so the (x, z) projection is a line
        let v0 = Vec3::new(1.0, 0.0, 0.0);
        let v1 = Vec3::new(1.0, 5.0, 0.0);
        let v2 = Vec3::new(1.0, 0.0, 5.0);
        assert!(horizontal_barycentric(Vec2::new(1.0, 1.0), v0, v1, v2).is_none());
    }

    #[test]
    fn test_interpolate_slope() {
        let v0 = Vec3::new(0.0, 0.0, 0.0);
        let v1 = Vec3::new(10.0, 10.0, 0.0);
        let v2 = Vec3::new(0.0, 0.0, 10.0);
        let w = horizontal_barycentric(Vec2::new(5.0, 0.0), v0, v1, v2).unwrap();
        let y = w.interpolate(v0.y, v1.y, v2.y);
        assert!((y - 5.0).abs() < 1e-4);
    }
}
