//! Conversion into Bevy meshes.

use crate::data::*;
use bevy_asset::RenderAssetUsages;
use bevy_render::mesh::{Indices, Mesh, PrimitiveTopology};

impl From<Topology> for PrimitiveTopology {
    fn from(value: Topology) -> Self {
        match value {
            Topology::Triangles => PrimitiveTopology::TriangleList,
            Topology::LineStrip => PrimitiveTopology::LineStrip,
        }
    }
}

impl From<MeshData> for Mesh {
    fn from(value: MeshData) -> Self {
        let MeshData {
            topology,
            positions,
            normals,
            uvs,
            triangles,
        } = value;
        let mut mesh = Mesh::new(topology.into(), RenderAssetUsages::RENDER_WORLD)
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        if !normals.is_empty() {
            mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        }
        if !uvs.is_empty() {
            mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        }
        if !triangles.is_empty() {
            mesh.insert_indices(Indices::U32(bytemuck::cast_vec(triangles)));
        }
        mesh
    }
}
