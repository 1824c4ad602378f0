//! Circular orbit paths.

use crate::data::*;
use bevy_math::{Vec2, Vec3};
use std::f32::consts::TAU;

/// A closed circle in the XZ plane, drawn as a line strip.
///
/// The first vertex is at `(radius, 0, 0)` and the path runs from +X towards +Z, the same way the orbital phase
/// advances. The last vertex repeats the first to close the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    pub segments: u32,
}
impl OrbitPath {
    pub const DEFAULT_SEGMENTS: u32 = 128;

    pub const fn new(radius: f32) -> Self {
        Self {
            radius,
            segments: Self::DEFAULT_SEGMENTS,
        }
    }
    pub const fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Point on the path at an angle.
    #[inline(always)]
    pub fn point(&self, angle: f32) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3::new(c * self.radius, 0.0, s * self.radius)
    }

    pub fn build(&self) -> Result<MeshData, MeshError> {
        if !(self.radius > 0.0) {
            return Err(MeshError::BadRadius(self.radius));
        }
        if self.segments < 3 {
            return Err(MeshError::TooFewSegments(self.segments));
        }
        let mut mesh = MeshData::new(Topology::LineStrip);
        for i in 0..=self.segments {
            let t = i as f32 / self.segments as f32;
            // exact seam, so the strip closes without a gap
            let angle = if i == self.segments { 0.0 } else { t * TAU };
            mesh.push_vertex(self.point(angle), Vec3::Y, Vec2::new(t, 0.0));
        }
        Ok(mesh)
    }
}
