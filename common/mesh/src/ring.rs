//! Flat rings, like Saturn's.

use crate::data::*;
use bevy_math::{Vec2, Vec3};
use std::f32::consts::TAU;

/// A flat ring centered on the origin in the XZ plane.
///
/// The top face sits at `+thickness / 2` and faces up, and the bottom face sits at `-thickness / 2` and faces down.
/// Texture coordinates run from the inner edge to the outer edge along U and around the ring along V, so a strip
/// texture of the ring's bands maps directly onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub thickness: f32,
    pub segments: u32,
}
impl Annulus {
    /// Saturn's ring, sized for a planet with a display radius of `0.75`.
    pub const SATURN: Self = Self {
        inner_radius: 4.0,
        outer_radius: 8.0,
        thickness: 0.01,
        segments: 64,
    };

    pub const fn new(inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            thickness: 0.0,
            segments: 64,
        }
    }
    pub const fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }
    pub const fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.inner_radius > 0.0 && self.inner_radius < self.outer_radius) {
            return Err(MeshError::BadRadii {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if !(self.thickness >= 0.0) {
            return Err(MeshError::BadThickness(self.thickness));
        }
        if self.segments < 3 {
            return Err(MeshError::TooFewSegments(self.segments));
        }
        Ok(())
    }

    /// Build the mesh for this ring.
    pub fn build(&self) -> Result<MeshData, MeshError> {
        self.validate()?;
        let mut mesh = MeshData::new(Topology::Triangles);
        let half = self.thickness * 0.5;
        self.append_face(&mut mesh, half, Vec3::Y);
        self.append_face(&mut mesh, -half, Vec3::NEG_Y);
        Ok(mesh)
    }

    /// Append one face of the ring, wound so that it faces along `normal`.
    fn append_face(&self, mesh: &mut MeshData, y: f32, normal: Vec3) {
        let base = mesh.vertex_count() as u32;
        // the seam is duplicated so V can reach 1.0
        for i in 0..=self.segments {
            let v = i as f32 / self.segments as f32;
            let (s, c) = (v * TAU).sin_cos();
            mesh.push_vertex(
                Vec3::new(c * self.inner_radius, y, s * self.inner_radius),
                normal,
                Vec2::new(0.0, v),
            );
            mesh.push_vertex(
                Vec3::new(c * self.outer_radius, y, s * self.outer_radius),
                normal,
                Vec2::new(1.0, v),
            );
        }
        let up = normal.y > 0.0;
        for i in 0..self.segments {
            let inner = base + i * 2;
            let outer = inner + 1;
            let next_inner = inner + 2;
            let next_outer = inner + 3;
            if up {
                mesh.triangles.push([inner, next_inner, outer]);
                mesh.triangles.push([outer, next_inner, next_outer]);
            } else {
                mesh.triangles.push([inner, outer, next_inner]);
                mesh.triangles.push([outer, next_outer, next_inner]);
            }
        }
    }
}
