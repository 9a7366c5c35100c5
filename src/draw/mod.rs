//! Raster primitives and Cairo rendering helpers.
//!
//! This module defines the low-level drawing types used by the mask editor:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Raster`]: owned pixel snapshot of a Cairo image surface
//! - Rendering functions for brush dots, stroke segments, and the background

pub mod color;
pub mod raster;
pub mod render;

// Re-export commonly used types at module level
pub use color::{Color, MASK_BLACK, MASK_WHITE};
pub use raster::Raster;
pub use render::{Ink, StrokeStyle, render_background, render_dot, render_layer, render_segment};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, PINK, RED, TRANSPARENT, WHITE, YELLOW};
