//! Uniform circular orbits.
//!
//! Each body moves around the sun on a circle of radius [`distance`](CelestialBodyParameters::distance) at a constant
//! angular velocity, spins at its own constant rate, and is tilted by a fixed angle. The orbit lies in the XZ plane,
//! with the phase measured from +X towards +Z.

use crate::body::CelestialBodyParameters;
use crate::playback::SimulationState;
use bevy_math::{DVec2, Vec3};

/// Error returned by [`DeltaTime::new`] for a time step that would run the simulation backwards.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DeltaTimeError {
    #[error("time delta {0} is negative")]
    Negative(f64),
    #[error("time delta {0} is not finite")]
    NonFinite(f64),
}

/// Elapsed simulated time. This is always finite and non-negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct DeltaTime(f64);
impl DeltaTime {
    pub const ZERO: Self = Self(0.0);

    /// Create a time step, rejecting negative or non-finite values.
    pub fn new(value: f64) -> Result<Self, DeltaTimeError> {
        if !value.is_finite() {
            Err(DeltaTimeError::NonFinite(value))
        } else if value < 0.0 {
            Err(DeltaTimeError::Negative(value))
        } else {
            Ok(Self(value))
        }
    }
    /// Create a time step, replacing negative or non-finite values with zero.
    pub fn clamped(value: f64) -> Self {
        Self::new(value).unwrap_or(Self::ZERO)
    }
    #[inline(always)]
    pub const fn get(self) -> f64 {
        self.0
    }
}
impl TryFrom<f64> for DeltaTime {
    type Error = DeltaTimeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The result of advancing one body by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyUpdate {
    /// Position along the X axis.
    pub x: f64,
    /// Position along the Z axis.
    pub z: f64,
    /// How much the body spun during this step, in radians.
    ///
    /// The body's spin angle isn't tracked here, so the caller should accumulate this.
    pub spin_delta: f64,
    /// Axial tilt, in radians.
    pub tilt: f64,
}
impl BodyUpdate {
    /// Position in the orbital plane.
    #[inline(always)]
    pub fn position(&self) -> Vec3 {
        self.translation(0.0)
    }
    /// Position with a height that's left alone by the orbit.
    #[inline(always)]
    pub fn translation(&self, y: f32) -> Vec3 {
        Vec3::new(self.x as f32, y, self.z as f32)
    }
    /// Apply this update to an existing translation, keeping its Y coordinate.
    #[inline(always)]
    pub fn apply_to(&self, translation: Vec3) -> Vec3 {
        self.translation(translation.y)
    }
}

/// Advance a single body.
///
/// The phase is accumulated before the position is computed, so the returned position is for the end of the step.
pub fn step(body: &mut CelestialBodyParameters, delta: DeltaTime) -> BodyUpdate {
    let dt = delta.get();
    body.initial_angle += dt * body.orbit_speed;
    let DVec2 { x, y: z } = DVec2::from_angle(body.initial_angle) * body.distance;
    BodyUpdate {
        x,
        z,
        spin_delta: body.rotation_speed * dt,
        tilt: body.tilt_radians(),
    }
}

/// Advance every body, in order.
///
/// When the simulation is paused, nothing is touched and `None` is returned. Otherwise, the updates are returned in the
/// same order as the bodies.
pub fn advance(
    bodies: &mut [CelestialBodyParameters],
    delta: DeltaTime,
    state: SimulationState,
) -> Option<Vec<BodyUpdate>> {
    match state {
        SimulationState::Paused => None,
        SimulationState::Running => Some(bodies.iter_mut().map(|b| step(b, delta)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::SOLAR_SYSTEM;
    use approx::assert_abs_diff_eq;
    use rand::Rng;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn body(distance: f64, orbit_speed: f64, initial_angle: f64) -> CelestialBodyParameters {
        CelestialBodyParameters {
            name: "Test",
            radius: 1.0,
            distance,
            real_distance: 0.0,
            rotation_speed: 2.0,
            orbit_speed,
            axial_tilt: 180.0,
            initial_angle,
        }
    }

    #[test]
    fn rejects_bad_deltas() {
        assert_eq!(DeltaTime::new(-1.0), Err(DeltaTimeError::Negative(-1.0)));
        assert!(matches!(
            DeltaTime::new(f64::NAN),
            Err(DeltaTimeError::NonFinite(_))
        ));
        assert!(DeltaTime::new(f64::INFINITY).is_err());
        assert_eq!(DeltaTime::clamped(-0.5), DeltaTime::ZERO);
        assert_eq!(DeltaTime::clamped(f64::NAN), DeltaTime::ZERO);
        assert_eq!(DeltaTime::clamped(0.25).get(), 0.25);
        assert_eq!(DeltaTime::try_from(3.0).map(DeltaTime::get), Ok(3.0));
    }

    #[test]
    fn quarter_orbit() {
        let mut bodies = [body(10.0, 1.0, 0.0)];
        let updates = advance(
            &mut bodies,
            DeltaTime::clamped(FRAC_PI_2),
            SimulationState::Running,
        )
        .unwrap();
        assert_eq!(updates.len(), 1);
        assert_abs_diff_eq!(bodies[0].initial_angle, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(updates[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(updates[0].z, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(updates[0].spin_delta, PI, epsilon = 1e-12);
    }

    #[test]
    fn earth_distance_position_keeps_height() {
        let mut earth = body(45.0, 0.5, 0.0);
        let update = step(&mut earth, DeltaTime::clamped(PI));
        let pos = update.apply_to(Vec3::new(7.0, 3.0, -2.0));
        assert_abs_diff_eq!(pos.x, 0.0, epsilon = 1e-5);
        assert_eq!(pos.y, 3.0);
        assert_abs_diff_eq!(pos.z, 45.0, epsilon = 1e-5);
        assert_eq!(update.position().y, 0.0);
    }

    #[test]
    fn tilt_is_recomputed() {
        let mut bodies = [body(1.0, 1.0, 0.0)];
        for _ in 0..5 {
            let updates = advance(
                &mut bodies,
                DeltaTime::clamped(0.1),
                SimulationState::Running,
            )
            .unwrap();
            assert_abs_diff_eq!(updates[0].tilt, PI, epsilon = 1e-12);
        }
        bodies[0].axial_tilt = 90.0;
        let updates = advance(&mut bodies, DeltaTime::ZERO, SimulationState::Running).unwrap();
        assert_abs_diff_eq!(updates[0].tilt, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn zero_delta_is_stationary() {
        let mut bodies = SOLAR_SYSTEM;
        let updates = advance(&mut bodies, DeltaTime::ZERO, SimulationState::Running).unwrap();
        assert_eq!(bodies, SOLAR_SYSTEM);
        for (u, b) in updates.iter().zip(&bodies) {
            assert_abs_diff_eq!(u.x.hypot(u.z), b.distance, epsilon = 1e-9);
            assert_eq!(u.spin_delta, 0.0);
        }
    }

    mod randomized {
        use super::*;

        fn random_bodies(rng: &mut impl Rng, n: usize) -> Vec<CelestialBodyParameters> {
            (0..n)
                .map(|_| CelestialBodyParameters {
                    name: "Random",
                    radius: rng.gen_range(0.01..1.0),
                    distance: rng.gen_range(1.0..200.0),
                    real_distance: rng.gen_range(0.0..50000.0),
                    rotation_speed: rng.gen_range(-400.0..400.0),
                    orbit_speed: rng.gen_range(0.001..2.0),
                    axial_tilt: rng.gen_range(0.0..180.0),
                    initial_angle: rng.gen_range(0.0..std::f64::consts::TAU),
                })
                .collect()
        }

        #[test]
        fn angle_accumulates() {
            let rng = &mut rand::thread_rng();
            for _ in 0..1000 {
                let mut bodies = random_bodies(rng, 8);
                let before = bodies.clone();
                let dt = rng.gen_range(0.0..10.0);
                advance(
                    &mut bodies,
                    DeltaTime::clamped(dt),
                    SimulationState::Running,
                )
                .unwrap();
                for (old, new) in before.iter().zip(&bodies) {
                    assert_abs_diff_eq!(
                        new.initial_angle,
                        old.initial_angle + dt * old.orbit_speed,
                        epsilon = 1e-9
                    );
                    assert_eq!(new.distance, old.distance);
                    assert_eq!(new.orbit_speed, old.orbit_speed);
                }
            }
        }

        #[test]
        fn pause_is_idempotent() {
            let rng = &mut rand::thread_rng();
            let mut bodies = random_bodies(rng, 8);
            let before = bodies.clone();
            for _ in 0..100 {
                let dt = DeltaTime::clamped(rng.gen_range(0.0..10.0));
                assert_eq!(advance(&mut bodies, dt, SimulationState::Paused), None);
            }
            assert_eq!(bodies, before);
        }

        #[test]
        fn angle_is_monotonic() {
            let rng = &mut rand::thread_rng();
            let mut bodies = random_bodies(rng, 8);
            for _ in 0..1000 {
                let before = bodies.clone();
                let dt = DeltaTime::clamped(rng.gen_range(0.0..0.1));
                advance(&mut bodies, dt, SimulationState::Running).unwrap();
                for (old, new) in before.iter().zip(&bodies) {
                    assert!(new.initial_angle >= old.initial_angle);
                }
            }
        }

        #[test]
        fn bodies_are_independent() {
            let rng = &mut rand::thread_rng();
            for _ in 0..100 {
                let mut bodies = random_bodies(rng, 2);
                let untouched = bodies[1];
                step(&mut bodies[0], DeltaTime::clamped(rng.gen_range(0.0..10.0)));
                assert_eq!(bodies[1], untouched);
            }
        }
    }
}
