use glam::Vec3;

use super::mesh::MeshCollider;
use crate::math::closest_point_on_triangle;

/// Triangles with |normal.y| below this count as walls
pub const WALL_NORMAL_Y_LIMIT: f32 = 0.7;

/// Fraction of the body height, measured from the feet, that is never tested
/// against walls so small ledges and ramps do not block movement
pub const STEP_CLEARANCE_RATIO: f32 = 0.3;

const BODY_SAMPLES: usize = 3;

/// Character body as a vertical segment with a radius, anchored at the eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    pub height: f32,
    pub radius: f32,
}

impl BodyShape {
    /// Points along the body from just above the step clearance up to the eye
    fn sample_points(&self, eye: Vec3) -> [Vec3; BODY_SAMPLES] {
        let low = eye.y - self.height * (1.0 - STEP_CLEARANCE_RATIO);
        let span = eye.y - low;
        std::array::from_fn(|i| {
            let t = i as f32 / (BODY_SAMPLES - 1) as f32;
            Vec3::new(eye.x, low + span * t, eye.z)
        })
    }
}

/// Whether a triangle is steep enough to act as a wall
pub fn is_wall(triangle: [Vec3; 3]) -> bool {
    let [v0, v1, v2] = triangle;
    match (v1 - v0).cross(v2 - v0).try_normalize() {
        Some(normal) => normal.y.abs() < WALL_NORMAL_Y_LIMIT,
        None => false,
    }
}

/// True when a body with its eye at `eye` would overlap any wall triangle.
///
/// The body is approximated by a few sample points, so walls thinner than
/// the sample spacing can slip between them.
pub fn blocks_movement(eye: Vec3, meshes: &[MeshCollider], body: BodyShape) -> bool {
    let samples = body.sample_points(eye);
    let radius_sq = body.radius * body.radius;

    meshes
        .iter()
        .flat_map(|mesh| mesh.triangles())
        .filter(|&tri| is_wall(tri))
        .any(|[a, b, c]| {
            samples
                .iter()
                .any(|&p| closest_point_on_triangle(p, a, b, c).distance_squared(p) < radius_sq)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wall in the z = 5 plane spanning x in [-50, 50], y in [0, 200]
    fn wall_mesh() -> MeshCollider {
        MeshCollider::new(
            vec![
                Vec3::new(-50.0, 0.0, 5.0),
                Vec3::new(50.0, 0.0, 5.0),
                Vec3::new(50.0, 200.0, 5.0),
                Vec3::new(-50.0, 200.0, 5.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    fn body() -> BodyShape {
        BodyShape {
            height: 100.0,
            radius: 30.0,
        }
    }

    #[test]
    fn test_floor_is_not_wall() {
        let floor = [Vec3::ZERO, Vec3::X, Vec3::Z];
        assert!(!is_wall(floor));
    }

    #[test]
    fn test_vertical_is_wall() {
        let wall = [Vec3::ZERO, Vec3::X, Vec3::Y];
        assert!(is_wall(wall));
    }

    #[test]
    fn test_degenerate_is_not_wall() {
        let line = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
        assert!(!is_wall(line));
    }

    #[test]
    fn test_near_wall_blocks() {
        let meshes = [wall_mesh()];
        assert!(blocks_movement(Vec3::new(0.0, 100.0, 20.0), &meshes, body()));
    }

    #[test]
    fn test_far_from_wall_passes() {
        let meshes = [wall_mesh()];
        assert!(!blocks_movement(Vec3::new(0.0, 100.0, 60.0), &meshes, body()));
    }

    #[test]
    fn test_wall_below_step_clearance_ignored() {
        // Low kerb: 20 units tall, below 30% of a 100-unit body
        let kerb = MeshCollider::new(
            vec![
                Vec3::new(-50.0, 0.0, 5.0),
                Vec3::new(50.0, 0.0, 5.0),
                Vec3::new(50.0, 20.0, 5.0),
                Vec3::new(-50.0, 20.0, 5.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        let body = BodyShape {
            height: 100.0,
            radius: 5.0,
        };
        assert!(!blocks_movement(Vec3::new(0.0, 100.0, 8.0), &[kerb], body));
    }
}
