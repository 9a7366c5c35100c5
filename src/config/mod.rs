//! Configuration file support for inpaint-mask.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inpaint-mask/config.toml`. Settings include brush defaults,
//! the highlight tint, resize behaviour, and export naming.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, ResizePolicy};
pub use types::{BrushConfig, ExportConfig, HighlightConfig, SurfaceConfig};

use crate::editor::{MAX_DIAMETER, MIN_DIAMETER};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_diameter = 40.0
/// default_mode = "paint"
/// step = 5.0
///
/// [highlight]
/// color = [255, 64, 96]
/// opacity = 0.5
///
/// [surface]
/// resize_policy = "preserve"
/// antialias = true
///
/// [export]
/// filename = "mask.png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (diameter, mode, step)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Selection highlight appearance
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Surface layout behaviour
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Export naming
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.default_diameter`: 5.0 - 150.0
    /// - `brush.step`: 1.0 - 50.0
    /// - `highlight.opacity`: 0.05 - 1.0
    /// - `export.filename`: non-empty, ends with `.png`
    pub fn validate_and_clamp(&mut self) {
        if !(MIN_DIAMETER..=MAX_DIAMETER).contains(&self.brush.default_diameter) {
            log::warn!(
                "Invalid default_diameter {:.1}, clamping to {MIN_DIAMETER:.0}-{MAX_DIAMETER:.0} range",
                self.brush.default_diameter
            );
            self.brush.default_diameter = if self.brush.default_diameter.is_nan() {
                40.0
            } else {
                self.brush.default_diameter.clamp(MIN_DIAMETER, MAX_DIAMETER)
            };
        }

        if !(1.0..=50.0).contains(&self.brush.step) {
            log::warn!(
                "Invalid brush step {:.1}, clamping to 1.0-50.0 range",
                self.brush.step
            );
            self.brush.step = if self.brush.step.is_nan() {
                5.0
            } else {
                self.brush.step.clamp(1.0, 50.0)
            };
        }

        if !(0.05..=1.0).contains(&self.highlight.opacity) {
            log::warn!(
                "Invalid highlight opacity {:.2}, clamping to 0.05-1.0 range",
                self.highlight.opacity
            );
            self.highlight.opacity = if self.highlight.opacity.is_nan() {
                0.5
            } else {
                self.highlight.opacity.clamp(0.05, 1.0)
            };
        }

        let filename = self.export.filename.trim();
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || !filename.to_lowercase().ends_with(".png")
        {
            log::warn!(
                "Invalid export filename '{}', falling back to 'mask.png'",
                self.export.filename
            );
            self.export.filename = types::default_filename();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inpaint-mask/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inpaint-mask");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists at the target path or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
