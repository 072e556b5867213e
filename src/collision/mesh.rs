use glam::{Vec2, Vec3};

/// Static triangle mesh used for collision queries.
///
/// Vertices are world-space positions; `indices` groups them into triangles,
/// three at a time. Index triples that reference missing vertices and an
/// incomplete trailing triple are ignored by [`MeshCollider::triangles`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshCollider {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshCollider {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Build a collider from an unindexed triangle list
    pub fn from_triangle_list(positions: Vec<Vec3>) -> Self {
        let indices = (0..positions.len() as u32).collect();
        Self::new(positions, indices)
    }

    /// Axis-aligned horizontal rectangle at height `y`, split into two triangles.
    /// `min`/`max` are (x, z) corners.
    pub fn flat_quad(min: Vec2, max: Vec2, y: f32) -> Self {
        let positions = vec![
            Vec3::new(min.x, y, min.y),
            Vec3::new(max.x, y, min.y),
            Vec3::new(max.x, y, max.y),
            Vec3::new(min.x, y, max.y),
        ];
        Self::new(positions, vec![0, 1, 2, 0, 2, 3])
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Iterate over the triangles' world-space corners
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |tri| {
            let v0 = *self.positions.get(tri[0] as usize)?;
            let v1 = *self.positions.get(tri[1] as usize)?;
            let v2 = *self.positions.get(tri[2] as usize)?;
            Some([v0, v1, v2])
        })
    }
}
