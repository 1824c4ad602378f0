//! The orbit camera, following targets and zooming.

use crate::config::ViewerConfig;
use crate::scene::{BodyIndex, Sun};
use bevy_egui::EguiContexts;
use bevy_gui::core_pipeline::Skybox;
use bevy_gui::core_pipeline::bloom::Bloom;
use bevy_gui::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy_gui::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use orrery_sim::CameraTarget;

/// Scroll amount for one line of a line-based mouse wheel, in pixels.
const PIXELS_PER_LINE: f32 = 100.0;

/// Radius limits for the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

/// Compute the new camera radius after scrolling by `delta_y` pixels.
///
/// Positive deltas zoom out. The step grows with the radius so zooming feels the same from close up and far away.
pub fn zoom_radius(radius: f32, delta_y: f32, limits: ZoomLimits) -> f32 {
    let speed = (radius / 10.0).max(0.05);
    (radius + delta_y * 0.005 * speed).clamp(limits.min, limits.max)
}

pub fn spawn_camera(mut commands: Commands, config: Res<ViewerConfig>, assets: Res<AssetServer>) {
    let cam = &config.camera;
    let mut camera = commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            near: 0.001,
            ..default()
        }),
        Bloom::NATURAL,
        // PanOrbitCamera places the camera from yaw, pitch, and radius
        Transform::from_xyz(0.0, 0.0, cam.radius),
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(cam.radius),
            yaw: Some(cam.yaw),
            pitch: Some(cam.pitch),
            zoom_lower_limit: cam.min_radius,
            zoom_upper_limit: Some(cam.max_radius),
            // zooming is handled by `zoom_camera`
            zoom_sensitivity: 0.0,
            pan_sensitivity: cam.pan_sensitivity,
            orbit_sensitivity: cam.orbit_sensitivity,
            ..default()
        },
    ));
    if let Some(path) = &config.skybox {
        camera.insert(Skybox {
            image: assets.load(path.clone()),
            brightness: 1000.0,
            rotation: Quat::IDENTITY,
        });
    }
}

/// Keep the camera's focus on the current target.
///
/// The sun and planets aren't parented to anything, so their local transforms are already up to date for this frame.
pub fn follow_target(
    target: Res<CameraTarget>,
    sun: Query<&Transform, With<Sun>>,
    planets: Query<(&BodyIndex, &Transform)>,
    mut cameras: Query<&mut PanOrbitCamera>,
) {
    let focus = match *target {
        CameraTarget::Free => return,
        CameraTarget::Sun => sun.iter().next().map(|t| t.translation),
        CameraTarget::Body(idx) => planets
            .iter()
            .find(|(i, _)| i.0 == idx)
            .map(|(_, t)| t.translation),
    };
    let Some(focus) = focus else {
        return;
    };
    for mut cam in cameras.iter_mut() {
        if cam.target_focus != focus {
            cam.target_focus = focus;
        }
    }
}

/// Zoom with the mouse wheel, unless the pointer is over the UI.
pub fn zoom_camera(
    mut wheel: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    config: Res<ViewerConfig>,
    mut cameras: Query<&mut PanOrbitCamera>,
) {
    let delta_y: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => -ev.y * PIXELS_PER_LINE,
            MouseScrollUnit::Pixel => -ev.y,
        })
        .sum();
    if delta_y == 0.0 || contexts.ctx_mut().is_ok_and(|ctx| ctx.wants_pointer_input()) {
        return;
    }
    let limits = ZoomLimits {
        min: config.camera.min_radius,
        max: config.camera.max_radius,
    };
    for mut cam in cameras.iter_mut() {
        cam.target_radius = zoom_radius(cam.target_radius, delta_y, limits);
    }
}
