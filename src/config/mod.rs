//! Configuration file support for pixelpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/pixelpad/config.toml`.
//! Settings include canvas dimensions, brush size range, and picker widget
//! geometry.
//!
//! If no config file exists, sensible defaults are used automatically.
//! Structural invariants (positive canvas dimensions, an ordered tool size
//! range) are fatal at load time; cosmetic values are clamped with a
//! warning instead.

pub mod types;

// Re-export commonly used types at module level
pub use types::{CanvasConfig, PickerConfig, ToolConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal configuration errors.
///
/// These violate invariants the rest of the crate relies on, so they are
/// reported at startup rather than clamped away.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas dimensions must be positive (got {width}x{height})")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("tool size range is invalid: min {min} must be positive and at most max {max}")]
    InvalidToolSizeRange { min: f64, max: f64 },
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the
/// TOML file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
///
/// [tools]
/// min_size = 1.0
/// max_size = 25.0
/// default_size = 0.2
///
/// [picker]
/// hue_wheel_size = 512.0
/// sv_rect_size = 64.0
/// selector_size = 16.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Brush size range and default
    #[serde(default)]
    pub tools: ToolConfig,

    /// Picker widget geometry
    #[serde(default)]
    pub picker: PickerConfig,
}

impl Config {
    /// Checks fatal invariants and clamps cosmetic values.
    ///
    /// Fatal (returns an error): canvas width/height of zero, a
    /// non-positive minimum tool size, or min_size > max_size. Everything
    /// downstream (buffer allocation, stroke step size) relies on these.
    ///
    /// Clamped with a warning: default_size outside [0, 1], non-positive
    /// picker widget sizes.
    fn validate_and_clamp(&mut self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        if self.tools.min_size <= 0.0 || self.tools.min_size > self.tools.max_size {
            return Err(ConfigError::InvalidToolSizeRange {
                min: self.tools.min_size,
                max: self.tools.max_size,
            });
        }

        // Default slider value: 0.0 - 1.0
        if !(0.0..=1.0).contains(&self.tools.default_size) {
            log::warn!(
                "Invalid default_size {:.2}, clamping to 0.0-1.0 range",
                self.tools.default_size
            );
            self.tools.default_size = self.tools.default_size.clamp(0.0, 1.0);
        }

        // Picker widget sizes must be positive to keep the coordinate
        // transforms meaningful.
        if self.picker.hue_wheel_size <= 0.0 {
            log::warn!(
                "Invalid hue_wheel_size {:.1}, falling back to default",
                self.picker.hue_wheel_size
            );
            self.picker.hue_wheel_size = PickerConfig::default().hue_wheel_size;
        }

        if self.picker.sv_rect_size <= 0.0 {
            log::warn!(
                "Invalid sv_rect_size {:.1}, falling back to default",
                self.picker.sv_rect_size
            );
            self.picker.sv_rect_size = PickerConfig::default().sv_rect_size;
        }

        if self.picker.selector_size < 0.0 || self.picker.selector_size >= self.picker.hue_wheel_size
        {
            log::warn!(
                "Invalid selector_size {:.1}, falling back to default",
                self.picker.selector_size
            );
            self.picker.selector_size = PickerConfig::default().selector_size;
        }

        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixelpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixelpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/pixelpad/config.toml`. If the file doesn't exist,
    /// returns a Config with default values. All loaded values are
    /// validated; cosmetic values are clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    /// - The file violates a fatal invariant (see [`ConfigError`])
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config
            .validate_and_clamp()
            .with_context(|| format!("Invalid config at {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 256);
        assert_eq!(config.canvas.height, 256);
        assert_eq!(config.tools.min_size, 1.0);
        assert_eq!(config.tools.max_size, 25.0);
        assert_eq!(config.tools.default_size, 0.2);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file = write_config("[canvas]\nwidth = 64\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 256);
        assert_eq!(config.tools.max_size, 25.0);
    }

    #[test]
    fn zero_canvas_dimension_is_fatal() {
        let file = write_config("[canvas]\nwidth = 0\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn inverted_tool_size_range_is_fatal() {
        let file = write_config("[tools]\nmin_size = 10.0\nmax_size = 2.0\n");
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn out_of_range_default_size_is_clamped() {
        let file = write_config("[tools]\ndefault_size = 3.5\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.tools.default_size, 1.0);
    }

    #[test]
    fn nonpositive_picker_sizes_fall_back() {
        let file = write_config("[picker]\nhue_wheel_size = -4.0\nsv_rect_size = 0.0\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.picker.hue_wheel_size, 512.0);
        assert_eq!(config.picker.sv_rect_size, 64.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let file = write_config("not toml at all [");
        assert!(Config::load_from_path(file.path()).is_err());
    }
}
