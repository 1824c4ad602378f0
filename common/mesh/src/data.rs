//! Engine-agnostic mesh storage.

use bevy_math::{Vec2, Vec3};

/// How the indices of a [`MeshData`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every three indices make a triangle.
    Triangles,
    /// Consecutive indices are joined by lines.
    LineStrip,
}

/// Error returned when a mesh can't be built from the given parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("inner radius {inner} must be positive and less than the outer radius {outer}")]
    BadRadii { inner: f32, outer: f32 },
    #[error("radius {0} must be positive")]
    BadRadius(f32),
    #[error("thickness {0} can't be negative")]
    BadThickness(f32),
    #[error("at least 3 segments are needed, got {0}")]
    TooFewSegments(u32),
}

/// Vertices and indices for a mesh.
///
/// Normals and UVs are either empty or have the same length as the positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub topology: Topology,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    /// For [`Topology::Triangles`], these are the triangles. For [`Topology::LineStrip`], this is empty and the
    /// vertices are drawn in order.
    pub triangles: Vec<[u32; 3]>,
}
impl MeshData {
    pub const fn new(topology: Topology) -> Self {
        Self {
            topology,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            triangles: Vec::new(),
        }
    }
    /// Add a vertex with a normal and UV, returning its index.
    pub fn push_vertex(&mut self, pos: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let idx = self.positions.len() as u32;
        self.positions.push(pos);
        self.normals.push(normal);
        self.uvs.push(uv);
        idx
    }
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
