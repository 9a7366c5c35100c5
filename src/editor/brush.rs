//! Brush size and mode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest brush diameter in pixels.
pub const MIN_DIAMETER: f64 = 5.0;

/// Largest brush diameter in pixels.
pub const MAX_DIAMETER: f64 = 150.0;

/// Whether strokes add to or remove from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BrushMode {
    /// Strokes add highlighted (selected) pixels
    #[default]
    Paint,
    /// Strokes remove selection from touched pixels
    Erase,
}

impl BrushMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Paint => Self::Erase,
            Self::Erase => Self::Paint,
        }
    }
}

impl std::str::FromStr for BrushMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paint" => Ok(Self::Paint),
            "erase" => Ok(Self::Erase),
            _ => Err(()),
        }
    }
}

/// Current brush settings.
///
/// Only changed through explicit controls; strokes read it live at every
/// segment, so changes mid-stroke apply from the next segment on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    diameter: f64,
    /// Paint or erase
    pub mode: BrushMode,
}

impl Default for BrushState {
    fn default() -> Self {
        Self::new(40.0, BrushMode::Paint)
    }
}

impl BrushState {
    /// Creates a brush, clamping `diameter` into the supported range.
    pub fn new(diameter: f64, mode: BrushMode) -> Self {
        let mut brush = Self {
            diameter: MIN_DIAMETER,
            mode,
        };
        brush.set_diameter(diameter);
        brush
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Sets the diameter, clamped to 5 - 150 pixels. NaN is ignored.
    pub fn set_diameter(&mut self, diameter: f64) {
        if diameter.is_nan() {
            return;
        }
        self.diameter = diameter.clamp(MIN_DIAMETER, MAX_DIAMETER);
    }

    /// Grows or shrinks the brush by `delta`, staying in range.
    pub fn adjust_diameter(&mut self, delta: f64) {
        self.set_diameter(self.diameter + delta);
    }

    /// Switches between paint and erase.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }
}
