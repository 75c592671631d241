//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`T4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use torus4d_core::{SimulationSettings, TorusSettings, WindField};
use torus4d_render::{ProjectionSettings, RenderSettings};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    /// Perspective and display constants
    #[serde(default)]
    pub projection: ProjectionSettings,
    /// Tesseract count and torus shape
    #[serde(default)]
    pub torus: TorusSettings,
    #[serde(default)]
    pub sphere: SphereConfig,
    /// Initial wind
    #[serde(default)]
    pub wind: WindField,
    #[serde(default)]
    pub input: InputConfig,
    /// Time step, time mode and rotation rates
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub rendering: RenderingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`T4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // T4D_TORUS__COUNT=64 -> torus.count = 64
        figment = figment.merge(Env::prefixed("T4D_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the projection or the sphere degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("projection.camera_distance", self.projection.camera_distance),
            ("projection.fov", self.projection.fov),
            ("projection.display_scale", self.projection.display_scale),
            ("projection.singularity_epsilon", self.projection.singularity_epsilon),
        ];
        for (field, value) in positive {
            // Also catches NaN
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {}", value)));
            }
        }
        if self.sphere.resolution == 0 {
            return Err(ConfigError::invalid("sphere.resolution", "must be at least 1"));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Torus4D - Tesseract Torus".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Central sphere mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    /// Latitude and longitude steps
    pub resolution: usize,
}

impl Default for SphereConfig {
    fn default() -> Self {
        let defaults = RenderSettings::default();
        Self {
            radius: defaults.sphere_radius,
            resolution: defaults.sphere_resolution,
        }
    }
}

impl SphereConfig {
    pub fn to_render_settings(&self) -> RenderSettings {
        RenderSettings {
            sphere_radius: self.radius,
            sphere_resolution: self.resolution,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Radians of 3D rotation per pixel dragged
    pub drag_sensitivity: f32,
    /// Wind change per key press
    pub wind_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.01,
            wind_step: 0.1,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show wind and auto-rotate state in the window title
    pub show_state_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_state_in_title: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("{} {}", field, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
