//! Canvas surface management.
//!
//! Computes the aspect-preserving [`DisplayGeometry`] for a container, and
//! keeps the background and overlay surfaces allocated at that geometry:
//! - [`SourceImage`] / [`PriorMask`]: immutable caller inputs
//! - [`SurfaceSet`]: the two aligned Cairo surfaces
//! - [`SurfaceManager`]: layout and resize handling

pub mod geometry;
pub mod manager;
pub mod source;

pub use geometry::DisplayGeometry;
pub use manager::{SurfaceManager, SurfaceSet};
pub use source::{PriorMask, SourceImage};
