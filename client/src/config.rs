//! Viewer settings.
//!
//! Everything has a default, so a config file only needs the fields it wants to change.

use bevy_gui::ecs as bevy_ecs;
use bevy_gui::prelude::Resource;
use orrery_sim::SpeedDivisor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that can point to a config file.
pub const CONFIG_ENV: &str = "ORRERY_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Starting distance from the focus.
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub pan_sensitivity: f32,
    pub orbit_sensitivity: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            yaw: 0.6,
            pitch: 0.35,
            min_radius: 0.1,
            max_radius: 1000.0,
            pan_sensitivity: 1.0,
            orbit_sensitivity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window_title: String,
    pub start_paused: bool,
    /// Initial position of the speed slider.
    pub speed_slider: u32,
    pub show_orbits: bool,
    pub camera: CameraConfig,
    pub sun_light_lumens: f32,
    pub shadow_map_size: usize,
    pub ambient_brightness: f32,
    /// Cubemap to use as the background, relative to the asset directory.
    pub skybox: Option<String>,
    pub log_filter: String,
}
impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Orrery".to_string(),
            start_paused: false,
            speed_slider: SpeedDivisor::SLIDER_MIN,
            show_orbits: true,
            camera: CameraConfig::default(),
            sun_light_lumens: 1.0e9,
            shadow_map_size: 512,
            ambient_brightness: 20.0,
            skybox: Some("hdri/starmap.ktx2".to_string()),
            log_filter: "info,wgpu=error,naga=warn".to_string(),
        }
    }
}
impl ViewerConfig {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }
    /// Load the config from the first argument or [`CONFIG_ENV`], or use the defaults if neither is set.
    ///
    /// The path that was used is returned along with the config.
    pub fn from_env() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = std::env::args_os()
            .nth(1)
            .or_else(|| std::env::var_os(CONFIG_ENV))
            .map(PathBuf::from);
        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SpeedDivisor::SLIDER_RANGE.contains(&self.speed_slider) {
            return Err(ConfigError::Invalid(format!(
                "speed_slider must be in {}..={}, got {}",
                SpeedDivisor::SLIDER_MIN,
                SpeedDivisor::SLIDER_MAX,
                self.speed_slider
            )));
        }
        let CameraConfig {
            min_radius,
            max_radius,
            radius,
            ..
        } = self.camera;
        if !(min_radius > 0.0 && min_radius < max_radius) {
            return Err(ConfigError::Invalid(format!(
                "camera radius limits must satisfy 0 < min_radius < max_radius, got {min_radius} and {max_radius}"
            )));
        }
        if !(min_radius..=max_radius).contains(&radius) {
            return Err(ConfigError::Invalid(format!(
                "camera radius {radius} is outside of {min_radius}..={max_radius}"
            )));
        }
        if self.shadow_map_size == 0 {
            return Err(ConfigError::Invalid(
                "shadow_map_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
    #[inline(always)]
    pub fn speed(&self) -> SpeedDivisor {
        SpeedDivisor::from_slider_clamped(self.speed_slider)
    }
}
