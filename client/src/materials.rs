//! Materials and texture paths.
//!
//! Planet textures live in `textures/{Name}/`, with a diffuse map, a normal map, and an occlusion/roughness map whose
//! red channel is ambient occlusion and green channel is roughness.

use bevy_gui::prelude::*;

pub const SUN_TEXTURE: &str = "textures/sun/sun.jpg";
pub const MOON_TEXTURE: &str = "textures/earth/moon.jpg";
pub const RING_TEXTURE: &str = "textures/saturn/small_ring_tex.png";

/// The set of texture paths for a planet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetTextures {
    pub diffuse: String,
    pub normal: String,
    pub occlusion_roughness: String,
}
impl PlanetTextures {
    pub fn for_body(name: &str) -> Self {
        Self {
            diffuse: format!("textures/{name}/{name}Diffuse.jpg"),
            normal: format!("textures/{name}/{name}NH.jpg"),
            occlusion_roughness: format!("textures/{name}/{name}AR.jpg"),
        }
    }
}

pub fn planet_material(assets: &AssetServer, name: &str) -> StandardMaterial {
    let paths = PlanetTextures::for_body(name);
    let packed: Handle<Image> = assets.load(paths.occlusion_roughness);
    StandardMaterial {
        base_color_texture: Some(assets.load(paths.diffuse)),
        normal_map_texture: Some(assets.load(paths.normal)),
        flip_normal_map_y: true,
        // metallic is zero, so only the green channel of this matters
        metallic_roughness_texture: Some(packed.clone()),
        occlusion_texture: Some(packed),
        metallic: 0.0,
        perceptual_roughness: 1.0,
        ..default()
    }
}

pub fn sun_material(assets: &AssetServer) -> StandardMaterial {
    let texture: Handle<Image> = assets.load(SUN_TEXTURE);
    StandardMaterial {
        base_color_texture: Some(texture.clone()),
        emissive: LinearRgba::rgb(4.0, 4.0, 4.0),
        emissive_texture: Some(texture),
        ..default()
    }
}

pub fn ring_material(assets: &AssetServer) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::linear_rgba(1.0, 1.0, 1.0, 0.9),
        base_color_texture: Some(assets.load(RING_TEXTURE)),
        emissive: LinearRgba::rgb(0.01, 0.01, 0.01),
        perceptual_roughness: 0.95,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        double_sided: true,
        ..default()
    }
}

pub fn moon_material(assets: &AssetServer) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(assets.load(MOON_TEXTURE)),
        perceptual_roughness: 0.95,
        metallic: 0.0,
        ..default()
    }
}

pub fn orbit_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::linear_rgb(0.5, 0.5, 0.5),
        unlit: true,
        ..default()
    }
}
