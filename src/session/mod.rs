//! Scripted editing sessions.
//!
//! A session script is a JSON array of actions, each standing in for one
//! editor control (brush slider, mode toggle, invert/clear buttons, a pointer
//! drag, a container resize, save or close):
//!
//! ```json
//! [
//!   { "op": "brush", "diameter": 30, "mode": "paint" },
//!   { "op": "brush", "steps": -1 },
//!   { "op": "stroke", "points": [[10, 10], [120, 80]] },
//!   { "op": "invert" },
//!   { "op": "save" }
//! ]
//! ```

mod replay;

pub use replay::{SessionEnd, replay};

use crate::editor::BrushMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One editor control, as recorded in a session script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionAction {
    /// Brush controls, applied in field order.
    ///
    /// `diameter` sets the size, `steps` moves it by whole configured
    /// `brush.step` increments, `adjust` nudges it by raw pixels, and `mode`
    /// switches paint/erase.
    Brush {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diameter: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        steps: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        adjust: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<BrushMode>,
    },
    /// A pointer drag along `points`.
    ///
    /// Points are overlay-local unless `origin` is given, in which case they
    /// are device coordinates and `origin` is the overlay's top-left corner.
    Stroke {
        points: Vec<[f64; 2]>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        origin: Option<[f64; 2]>,
    },
    Invert,
    Clear,
    /// Container resize.
    Resize { width: u32, height: u32 },
    Save,
    Close,
}

/// An ordered list of actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub actions: Vec<SessionAction>,
}

impl Session {
    pub fn new(actions: Vec<SessionAction>) -> Self {
        Self { actions }
    }

    /// Parses a session script.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse session script")
    }

    /// Loads a session script from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read session script {}", path.display()))?;
        let session = Self::from_json_str(&json)
            .with_context(|| format!("invalid session script {}", path.display()))?;
        log::info!(
            "Loaded session script {} ({} actions)",
            path.display(),
            session.actions.len()
        );
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
