//! Orbiting bodies and the table that owns them.

use crate::kinematics::{self, BodyUpdate, DeltaTime};
use crate::playback::SimulationState;
use std::ops::Deref;

/// Parameters for a single body orbiting the sun.
///
/// Everything here is fixed at startup except [`Self::initial_angle`], which is the orbital phase and gets advanced by
/// [`advance`](crate::kinematics::advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBodyParameters {
    /// Name of the body, also used to find its textures.
    pub name: &'static str,
    /// Display radius parameter. The rendered sphere has a diameter of ten times this.
    pub radius: f64,
    /// Orbital radius around the sun, in render units.
    pub distance: f64,
    /// Actual distance from the sun, in units of 10⁵ km. This is only for display.
    pub real_distance: f64,
    /// Self-rotation rate, in radians per simulated time unit.
    pub rotation_speed: f64,
    /// Angular velocity around the sun, in radians per simulated time unit.
    pub orbit_speed: f64,
    /// Axial tilt, in degrees.
    pub axial_tilt: f64,
    /// Current orbital phase, in radians.
    pub initial_angle: f64,
}
impl CelestialBodyParameters {
    /// Axial tilt converted to radians.
    #[inline(always)]
    pub fn tilt_radians(&self) -> f64 {
        self.axial_tilt.to_radians()
    }
    /// Diameter of the rendered sphere.
    #[inline(always)]
    pub fn display_diameter(&self) -> f64 {
        self.radius * 10.0
    }
    /// Real distance from the sun, in kilometers.
    #[inline(always)]
    pub fn real_distance_km(&self) -> f64 {
        self.real_distance * 1e5
    }
}

/// The solar system, in order from the sun.
pub const SOLAR_SYSTEM: [CelestialBodyParameters; 8] = [
    CelestialBodyParameters {
        name: "Mercury",
        radius: 0.03,
        distance: 15.0,
        real_distance: 580.0,
        rotation_speed: 2.60,
        orbit_speed: 1.745,
        axial_tilt: 0.034,
        initial_angle: 0.476,
    },
    CelestialBodyParameters {
        name: "Venus",
        radius: 0.075,
        distance: 30.0,
        real_distance: 1080.0,
        rotation_speed: -0.628,
        orbit_speed: 0.681,
        axial_tilt: 177.4,
        initial_angle: 0.020,
    },
    CelestialBodyParameters {
        name: "Earth",
        radius: 0.08,
        distance: 45.0,
        real_distance: 1500.0,
        rotation_speed: 152.7,
        orbit_speed: 0.419,
        axial_tilt: 23.44,
        initial_angle: 3.665,
    },
    CelestialBodyParameters {
        name: "Mars",
        radius: 0.042,
        distance: 60.0,
        real_distance: 2280.0,
        rotation_speed: 148.2,
        orbit_speed: 0.223,
        axial_tilt: 25.19,
        initial_angle: 2.356,
    },
    CelestialBodyParameters {
        name: "Jupiter",
        radius: 0.89,
        distance: 75.0,
        real_distance: 7780.0,
        rotation_speed: 372.0,
        orbit_speed: 0.0353,
        axial_tilt: 3.13,
        initial_angle: 1.047,
    },
    CelestialBodyParameters {
        name: "Saturn",
        radius: 0.75,
        distance: 90.0,
        real_distance: 14290.0,
        rotation_speed: 346.0,
        orbit_speed: 0.0142,
        axial_tilt: 26.73,
        initial_angle: 5.759,
    },
    CelestialBodyParameters {
        name: "Uranus",
        radius: 0.32,
        distance: 105.0,
        real_distance: 28750.0,
        rotation_speed: -212.0,
        orbit_speed: 0.0050,
        axial_tilt: 97.77,
        initial_angle: 0.476,
    },
    CelestialBodyParameters {
        name: "Neptune",
        radius: 0.31,
        distance: 120.0,
        real_distance: 44970.0,
        rotation_speed: 228.3,
        orbit_speed: 0.00254,
        axial_tilt: 28.32,
        initial_angle: 0.542,
    },
];

/// Error returned when a name doesn't match any body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no body named {0:?}")]
pub struct UnknownBody(pub String);

/// What the camera is looking at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, bevy_ecs_macros::Resource)]
pub enum CameraTarget {
    /// The camera isn't attached to anything.
    #[default]
    Free,
    Sun,
    /// A body, by its index in the [`BodyTable`].
    Body(usize),
}

/// The owned, mutable set of orbiting bodies.
///
/// Only the orbital phases ever change after construction.
#[derive(Debug, Clone, PartialEq, bevy_ecs_macros::Resource)]
pub struct BodyTable {
    bodies: Vec<CelestialBodyParameters>,
}
impl BodyTable {
    pub fn new(bodies: Vec<CelestialBodyParameters>) -> Self {
        Self { bodies }
    }
    /// Create a fresh table from [`SOLAR_SYSTEM`].
    pub fn solar_system() -> Self {
        Self::new(SOLAR_SYSTEM.to_vec())
    }
    /// Find the index of a body by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
    }
    /// Resolve a camera target name.
    ///
    /// `"free"` and `"sun"` are special, and anything else has to be the name of a body in the table.
    pub fn resolve_target(&self, name: &str) -> Result<CameraTarget, UnknownBody> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("free") {
            Ok(CameraTarget::Free)
        } else if trimmed.eq_ignore_ascii_case("sun") {
            Ok(CameraTarget::Sun)
        } else {
            self.find(trimmed)
                .map(CameraTarget::Body)
                .ok_or_else(|| UnknownBody(name.to_string()))
        }
    }
    /// Advance every body's orbital phase. See [`kinematics::advance`].
    #[inline(always)]
    pub fn advance(&mut self, delta: DeltaTime, state: SimulationState) -> Option<Vec<BodyUpdate>> {
        kinematics::advance(&mut self.bodies, delta, state)
    }
    /// The display name for a target.
    pub fn target_name(&self, target: CameraTarget) -> &'static str {
        match target {
            CameraTarget::Free => "Free",
            CameraTarget::Sun => "Sun",
            CameraTarget::Body(idx) => self.bodies.get(idx).map_or("?", |b| b.name),
        }
    }
}
impl Default for BodyTable {
    fn default() -> Self {
        Self::solar_system()
    }
}
impl Deref for BodyTable {
    type Target = [CelestialBodyParameters];

    fn deref(&self) -> &Self::Target {
        &self.bodies
    }
}
