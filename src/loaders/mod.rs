pub mod gltf_collider;

pub use gltf_collider::load_gltf_colliders;
