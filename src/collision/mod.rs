//! Geometric queries against static triangle meshes.

pub mod ground_probe;
pub mod mesh;
pub mod wall_probe;

pub use ground_probe::{
    ground_height_or_fallback, probe_ground, probe_ground_hit, GroundHit, FALLBACK_GROUND_HEIGHT,
};
pub use mesh::MeshCollider;
pub use wall_probe::{blocks_movement, BodyShape};
