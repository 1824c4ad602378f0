use bevy_gui::log::LogPlugin;
use bevy_gui::pbr::PointLightShadowMap;
use bevy_gui::prelude::*;
use config::ViewerConfig;
use controls::{Control, OrbitPathsVisible};
use orrery_sim::{BodyTable, CameraTarget, Playback, SimulationState};

mod camera;
mod config;
mod controls;
mod materials;
mod motion;
mod scene;

fn main() -> AppExit {
    let (config, source) = match ViewerConfig::from_env() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window_title.clone(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: config.log_filter.clone(),
                    ..default()
                }),
            bevy_panorbit_camera::PanOrbitCameraPlugin,
            bevy_egui::EguiPlugin::default(),
        ))
        .add_event::<Control>()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(AmbientLight {
            brightness: config.ambient_brightness,
            ..default()
        })
        .insert_resource(PointLightShadowMap {
            size: config.shadow_map_size,
        })
        .insert_resource(BodyTable::solar_system())
        .insert_resource(Playback::new(
            SimulationState::from_paused(config.start_paused),
            config.speed(),
        ))
        .insert_resource(OrbitPathsVisible(config.show_orbits))
        .init_resource::<CameraTarget>()
        .insert_resource(config)
        .add_systems(
            Startup,
            (
                move || match &source {
                    Some(path) => info!("loaded config from {}", path.display()),
                    None => info!("using the default config"),
                },
                scene::setup_scene,
                camera::spawn_camera,
            ),
        )
        .add_systems(
            Update,
            (
                (
                    controls::keyboard_controls,
                    controls::apply_controls,
                    motion::advance_bodies,
                    camera::follow_target,
                )
                    .chain(),
                camera::zoom_camera,
            ),
        )
        .add_systems(bevy_egui::EguiPrimaryContextPass, controls::ui_system)
        .run()
}
