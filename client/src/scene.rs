//! Building the scene: the sun, planets, orbits, Saturn's ring, and the moon.

use crate::config::ViewerConfig;
use crate::materials;
use bevy_gui::ecs as bevy_ecs;
use bevy_gui::pbr::NotShadowCaster;
use bevy_gui::prelude::*;
use orrery_mesh::{Annulus, OrbitPath as OrbitPathMesh};
use orrery_sim::BodyTable;

/// Diameter of the sun's sphere.
pub const SUN_DIAMETER: f32 = 8.65;
pub const MOON_DIAMETER: f32 = 0.2;
/// Where the moon sits relative to Earth. It's attached to Earth, so it follows Earth's spin.
pub const MOON_OFFSET: Vec3 = Vec3::new(2.0, 2.0, 2.0);

#[derive(Component)]
pub struct Sun;

/// Index of a planet in the [`BodyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct BodyIndex(pub usize);

/// Accumulated self-rotation of a planet, in radians.
#[derive(Debug, Default, Clone, Copy, PartialEq, Component)]
pub struct Spin(pub f64);

#[derive(Component)]
pub struct OrbitPath;

#[derive(Component)]
pub struct Ring;

#[derive(Component)]
pub struct Moon;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    assets: Res<AssetServer>,
    config: Res<ViewerConfig>,
    table: Res<BodyTable>,
) -> Result {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_DIAMETER * 0.5).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(materials::sun_material(&assets))),
        Transform::IDENTITY,
        NotShadowCaster,
        Name::new("Sun"),
        Sun,
        children![(
            PointLight {
                intensity: config.sun_light_lumens,
                range: 500.0,
                radius: SUN_DIAMETER * 0.5,
                shadows_enabled: true,
                ..default()
            },
            Transform::IDENTITY,
        )],
    ));

    let orbit_material = materials.add(materials::orbit_material());
    let orbit_visibility = if config.show_orbits {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    for (idx, body) in table.iter().enumerate() {
        let sphere = Sphere::new(body.display_diameter() as f32 * 0.5)
            .mesh()
            .uv(64, 32)
            .with_generated_tangents()?;
        let mut planet = commands.spawn((
            Mesh3d(meshes.add(sphere)),
            MeshMaterial3d(materials.add(materials::planet_material(&assets, body.name))),
            // placed properly on the first update
            Transform::from_xyz(body.distance as f32, 0.0, 0.0),
            Name::new(body.name),
            BodyIndex(idx),
            Spin::default(),
        ));
        match body.name {
            "Saturn" => {
                planet.with_child((
                    Mesh3d(meshes.add(Mesh::from(Annulus::SATURN.build()?))),
                    MeshMaterial3d(materials.add(materials::ring_material(&assets))),
                    Transform::IDENTITY,
                    Name::new("Saturn's ring"),
                    Ring,
                ));
            }
            "Earth" => {
                planet.with_child((
                    Mesh3d(meshes.add(Sphere::new(MOON_DIAMETER * 0.5).mesh().uv(32, 16))),
                    MeshMaterial3d(materials.add(materials::moon_material(&assets))),
                    Transform::from_translation(MOON_OFFSET),
                    Name::new("Moon"),
                    Moon,
                ));
            }
            _ => {}
        }

        commands.spawn((
            Mesh3d(meshes.add(Mesh::from(
                OrbitPathMesh::new(body.distance as f32).build()?,
            ))),
            MeshMaterial3d(orbit_material.clone()),
            Transform::IDENTITY,
            orbit_visibility,
            NotShadowCaster,
            Name::new(format!("{} orbit", body.name)),
            OrbitPath,
        ));
    }

    info!("spawned the sun and {} bodies", table.len());
    Ok(())
}
