//! Procedural meshes for the orrery.
//!
//! Spheres come from the engine, but planetary rings and orbit paths are built here. Everything is generated into a
//! [`MeshData`], which can be converted into a Bevy mesh with the `render` feature.

pub mod data;
pub mod orbit;
#[cfg(feature = "render")]
pub mod render;
pub mod ring;

pub use data::{MeshData, MeshError, Topology};
pub use orbit::OrbitPath;
pub use ring::Annulus;
