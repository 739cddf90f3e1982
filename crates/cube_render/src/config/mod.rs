//! Configuration system
//!
//! Every tunable the renderer consumes lives in [`RendererConfig`] so the
//! projection, rotation speed, and clear color are configuration-driven
//! rather than hard-coded. Defaults reproduce the bundled demo.

pub use serde::{Deserialize, Serialize};

/// Configuration trait for loadable/saveable settings
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Perspective projection parameters
///
/// Computed into a matrix once at renderer construction and fixed for
/// the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to the near clipping plane (must be > 0)
    pub near: f32,

    /// Distance to the far clipping plane (must be > near)
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            aspect: 3.0 / 2.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Renderer configuration
///
/// Defaults match the bundled demo: a 90 degree field of view at 3:2,
/// the cube two units in front of the camera, a 0.2 radian rotation
/// step per frame, a mid-gray clear color, and texture unit 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Perspective projection parameters
    pub projection: ProjectionConfig,

    /// Rotation added per rendered frame, in radians
    ///
    /// The rotation is frame-count-driven, not wall-clock-driven, so the
    /// visual speed follows the display refresh rate.
    pub rotation_step: f32,

    /// Distance from the camera to the cube along -Z
    pub object_distance: f32,

    /// RGBA color the color buffer is cleared to each frame
    pub clear_color: [f32; 4],

    /// Texture unit the diffuse texture is bound to
    pub texture_unit: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            rotation_step: 0.2,
            object_distance: 2.0,
            clear_color: [0.5, 0.5, 0.5, 1.0],
            texture_unit: 6,
        }
    }
}

impl Config for RendererConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_values() {
        let config = RendererConfig::default();
        assert_eq!(config.projection.fov_degrees, 90.0);
        assert_eq!(config.projection.aspect, 1.5);
        assert_eq!(config.projection.near, 0.1);
        assert_eq!(config.projection.far, 100.0);
        assert_eq!(config.rotation_step, 0.2);
        assert_eq!(config.object_distance, 2.0);
        assert_eq!(config.clear_color, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(config.texture_unit, 6);
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let mut config = RendererConfig::default();
        config.rotation_step = 0.05;
        config.projection.fov_degrees = 60.0;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: RendererConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: RendererConfig = toml::from_str("rotation_step = 0.1").unwrap();
        assert_eq!(parsed.rotation_step, 0.1);
        assert_eq!(parsed.texture_unit, 6);
        assert_eq!(parsed.projection, ProjectionConfig::default());
    }
}
