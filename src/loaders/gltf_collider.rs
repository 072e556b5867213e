use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use log::{debug, info};
use std::path::Path;

use crate::collision::MeshCollider;

/// Loads a glTF file and flattens every triangle primitive into a
/// world-space collision mesh
pub fn load_gltf_colliders(path: impl AsRef<Path>) -> Result<Vec<MeshCollider>> {
    let path = path.as_ref();
    info!("Loading collision meshes from glTF: {:?}", path);

    let (gltf, buffers, _images) = gltf::import(path).context(format!("Failed to load glTF file: {:?}", path))?;

    let mut colliders = Vec::new();
    for scene in gltf.scenes() {
        debug!("Processing scene: {:?}", scene.name());
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut colliders)?;
        }
    }

    let triangles: usize = colliders.iter().map(MeshCollider::triangle_count).sum();
    info!("Extracted {} collision meshes ({} triangles)", colliders.len(), triangles);

    Ok(colliders)
}

/// Walks the node tree depth-first. glTF node transforms are relative to the
/// parent, so each child composes its local matrix onto the parent's.
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    colliders: &mut Vec<MeshCollider>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, colliders)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, colliders)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    colliders: &mut Vec<MeshCollider>,
) -> Result<()> {
    debug!("  Processing mesh: {:?}", mesh.name());

    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            debug!("  Skipping non-triangle primitive ({:?})", primitive.mode());
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("Mesh primitive has no positions")?
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        let collider = match reader.read_indices() {
            Some(indices) => MeshCollider::new(positions, indices.into_u32().collect()),
            None => MeshCollider::from_triangle_list(positions),
        };

        colliders.push(collider);
    }

    Ok(())
}
