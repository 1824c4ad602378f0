//! Moving the planets every frame.

use crate::scene::{BodyIndex, Spin};
use bevy_gui::prelude::*;
use orrery_sim::{BodyTable, BodyUpdate, Playback};
use std::f64::consts::TAU;

/// Advance the body table by this frame's time and move the planets to match.
pub fn advance_bodies(
    time: Res<Time>,
    playback: Res<Playback>,
    mut table: ResMut<BodyTable>,
    mut planets: Query<(&BodyIndex, &mut Spin, &mut Transform)>,
) {
    let delta = playback.delta(time.delta());
    let Some(updates) = table.advance(delta, playback.state) else {
        return;
    };
    for (&BodyIndex(idx), mut spin, mut transform) in planets.iter_mut() {
        let Some(update) = updates.get(idx) else {
            warn_once!("planet entity refers to missing body {idx}");
            continue;
        };
        apply_update(update, &mut spin, &mut transform);
    }
}

/// Move a planet's transform according to an update.
///
/// The tilt is applied outside of the spin, so the planet turns around its own tilted axis. The spin is kept in
/// `[0, TAU)` so it survives the cast to `f32`.
pub fn apply_update(update: &BodyUpdate, spin: &mut Spin, transform: &mut Transform) {
    spin.0 = (spin.0 + update.spin_delta).rem_euclid(TAU);
    transform.translation = update.apply_to(transform.translation);
    transform.rotation =
        Quat::from_rotation_x(update.tilt as f32) * Quat::from_rotation_y(spin.0 as f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use orrery_sim::{CelestialBodyParameters, SimulationState, SpeedDivisor};
    use std::f64::consts::FRAC_PI_2;
    use std::time::Duration;

    const TEST_BODY: CelestialBodyParameters = CelestialBodyParameters {
        name: "Test",
        radius: 0.1,
        distance: 10.0,
        real_distance: 0.0,
        rotation_speed: 1.0,
        orbit_speed: 1.0,
        axial_tilt: 90.0,
        initial_angle: 0.0,
    };

    fn app(state: SimulationState) -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(BodyTable::new(vec![TEST_BODY]))
            // ten seconds of frame time is one simulated unit
            .insert_resource(Playback::new(
                state,
                SpeedDivisor::from_slider_clamped(SpeedDivisor::SLIDER_MAX),
            ))
            .add_systems(Update, advance_bodies);
        let planet = app
            .world_mut()
            .spawn((BodyIndex(0), Spin::default(), Transform::from_xyz(0.0, 1.5, 0.0)))
            .id();
        (app, planet)
    }

    fn tick(app: &mut App, millis: f64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(millis / 1000.0));
        app.update();
    }

    #[test]
    fn moves_planets() {
        let (mut app, planet) = app(SimulationState::Running);
        tick(&mut app, FRAC_PI_2 * 10_000.0);
        let table = app.world().resource::<BodyTable>();
        assert_abs_diff_eq!(table[0].initial_angle, FRAC_PI_2, epsilon = 1e-6);
        let transform = app.world().get::<Transform>(planet).unwrap();
        assert_abs_diff_eq!(transform.translation.x, 0.0, epsilon = 1e-4);
        assert_eq!(transform.translation.y, 1.5);
        assert_abs_diff_eq!(transform.translation.z, 10.0, epsilon = 1e-4);
        let spin = app.world().get::<Spin>(planet).unwrap();
        assert_abs_diff_eq!(spin.0, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn paused_does_nothing() {
        let (mut app, planet) = app(SimulationState::Paused);
        for _ in 0..10 {
            tick(&mut app, 16.0);
        }
        assert_eq!(app.world().resource::<BodyTable>()[0], TEST_BODY);
        assert_eq!(
            *app.world().get::<Transform>(planet).unwrap(),
            Transform::from_xyz(0.0, 1.5, 0.0)
        );
        assert_eq!(app.world().get::<Spin>(planet).unwrap().0, 0.0);
    }

    #[test]
    fn tilt_is_applied_outside_spin() {
        let mut spin = Spin(0.0);
        let mut transform = Transform::IDENTITY;
        let update = BodyUpdate {
            x: 1.0,
            z: 2.0,
            spin_delta: 0.5,
            tilt: FRAC_PI_2,
        };
        apply_update(&update, &mut spin, &mut transform);
        apply_update(&update, &mut spin, &mut transform);
        assert_eq!(spin.0, 1.0);
        // the spin axis is Y tilted by 90 degrees around X
        let axis = transform.rotation * Vec3::Y;
        assert_abs_diff_eq!(axis.z, 1.0, epsilon = 1e-5);
        assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn spin_stays_wrapped() {
        let mut spin = Spin(0.0);
        let mut transform = Transform::IDENTITY;
        let update = BodyUpdate {
            x: 0.0,
            z: 0.0,
            spin_delta: 0.6,
            tilt: 0.0,
        };
        // about a day of frames at full speed
        for _ in 0..5_000_000 {
            apply_update(&update, &mut spin, &mut transform);
        }
        assert!((0.0..TAU).contains(&spin.0));
        let expected = (0.6 * 5_000_000.0f64).rem_euclid(TAU);
        assert_abs_diff_eq!(spin.0, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(
            transform.rotation.angle_between(Quat::from_rotation_y(expected as f32)),
            0.0,
            epsilon = 1e-3
        );

        let backwards = BodyUpdate {
            spin_delta: -1.0,
            ..update
        };
        let mut spin = Spin(0.5);
        apply_update(&backwards, &mut spin, &mut transform);
        assert_abs_diff_eq!(spin.0, TAU - 0.5, epsilon = 1e-12);
    }
}
