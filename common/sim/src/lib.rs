//! Simulation state for the orrery.
//!
//! This crate owns the table of orbiting bodies and the arithmetic that moves them. It has no opinion on how the
//! results get drawn; the client reads [`BodyUpdate`]s and applies them to whatever it renders.

pub mod body;
pub mod kinematics;
pub mod playback;

pub use body::{BodyTable, CameraTarget, CelestialBodyParameters, SOLAR_SYSTEM, UnknownBody};
pub use kinematics::{BodyUpdate, DeltaTime, DeltaTimeError, advance, step};
pub use playback::{Playback, SimulationState, SpeedDivisor, SpeedOutOfRange};
