//! Configuration type definitions.

use super::enums::{ColorSpec, ResizePolicy};
use crate::draw::Color;
use crate::editor::BrushMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when the editor opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Initial brush diameter in pixels (valid range: 5 - 150)
    #[serde(default = "default_diameter")]
    pub default_diameter: f64,

    /// Initial brush mode ("paint" or "erase")
    #[serde(default = "default_mode")]
    pub default_mode: BrushMode,

    /// Diameter change applied by one brush-size step (valid range: 1 - 50)
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_diameter: default_diameter(),
            default_mode: default_mode(),
            step: default_step(),
        }
    }
}

/// Translucent tint used to display the selected region.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HighlightConfig {
    /// Highlight color - a named color or an RGB array like `[255, 64, 96]`
    #[serde(default = "default_highlight_color")]
    pub color: ColorSpec,

    /// Highlight opacity (valid range: 0.05 - 1.0)
    #[serde(default = "default_highlight_opacity")]
    pub opacity: f64,
}

impl HighlightConfig {
    /// Resolved highlight color with opacity applied.
    pub fn to_color(&self) -> Color {
        self.color.to_color().with_alpha(self.opacity)
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: default_highlight_color(),
            opacity: default_highlight_opacity(),
        }
    }
}

/// Surface layout behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// What to do with unsaved overlay edits when the container is resized
    #[serde(default = "default_resize_policy")]
    pub resize_policy: ResizePolicy,

    /// Anti-alias brush edges (the exported mask is binary either way)
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            resize_policy: default_resize_policy(),
            antialias: default_antialias(),
        }
    }
}

/// Mask export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// File name attached to the exported mask blob
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_diameter() -> f64 {
    40.0
}

fn default_mode() -> BrushMode {
    BrushMode::Paint
}

fn default_step() -> f64 {
    5.0
}

fn default_highlight_color() -> ColorSpec {
    ColorSpec::Rgb([255, 64, 96])
}

fn default_highlight_opacity() -> f64 {
    0.5
}

fn default_resize_policy() -> ResizePolicy {
    ResizePolicy::Preserve
}

fn default_antialias() -> bool {
    true
}

pub(crate) fn default_filename() -> String {
    "mask.png".to_string()
}
