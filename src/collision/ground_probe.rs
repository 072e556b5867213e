use glam::{Vec2, Vec3};

use super::mesh::MeshCollider;
use crate::math::horizontal_barycentric;

/// Ground height used by callers when the probe finds nothing
pub const FALLBACK_GROUND_HEIGHT: f32 = 0.0;

/// Supporting surface found below a probe point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub height: f32,
    pub mesh_index: usize,
    pub triangle_index: usize,
}

/// Height of a single triangle directly below `point`, if the point's
/// horizontal projection falls inside it and the surface lies no higher than
/// the point and less than `max_distance` beneath it.
pub fn surface_height_below(point: Vec3, triangle: [Vec3; 3], max_distance: f32) -> Option<f32> {
    let [v0, v1, v2] = triangle;
    let weights = horizontal_barycentric(Vec2::new(point.x, point.z), v0, v1, v2)?;
    if !weights.contains() {
        return None;
    }

    let y = weights.interpolate(v0.y, v1.y, v2.y);
    (y <= point.y && point.y - y < max_distance).then_some(y)
}

/// Topmost supporting surface below `point` across all meshes.
///
/// Scans every triangle, so cost grows linearly with total triangle count.
/// A point exactly on an edge shared by two triangles may be attributed to
/// either of them.
pub fn probe_ground_hit(point: Vec3, meshes: &[MeshCollider], max_distance: f32) -> Option<GroundHit> {
    let mut best: Option<GroundHit> = None;

    for (mesh_index, mesh) in meshes.iter().enumerate() {
        for (triangle_index, triangle) in mesh.triangles().enumerate() {
            let Some(height) = surface_height_below(point, triangle, max_distance) else {
                continue;
            };
            if best.map_or(true, |hit| height > hit.height) {
                best = Some(GroundHit {
                    height,
                    mesh_index,
                    triangle_index,
                });
            }
        }
    }

    best
}

/// Height of the topmost supporting surface below `point`
pub fn probe_ground(point: Vec3, meshes: &[MeshCollider], max_distance: f32) -> Option<f32> {
    probe_ground_hit(point, meshes, max_distance).map(|hit| hit.height)
}

/// Ground height below `point`, or [`FALLBACK_GROUND_HEIGHT`] when none qualifies
pub fn ground_height_or_fallback(point: Vec3, meshes: &[MeshCollider], max_distance: f32) -> f32 {
    probe_ground(point, meshes, max_distance).unwrap_or(FALLBACK_GROUND_HEIGHT)
}
