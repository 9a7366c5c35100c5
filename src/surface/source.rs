//! Caller-supplied inputs: the source image and an optional prior mask.
//!
//! Both are decoded once when the editor opens and are never mutated.

use super::geometry::DisplayGeometry;
use crate::draw::color::argb_luma;
use crate::draw::{Color, Raster};
use crate::error::EditorError;
use cairo::ImageSurface;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Immutable raster the user is masking.
#[derive(Clone)]
pub struct SourceImage {
    surface: ImageSurface,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl SourceImage {
    /// Wraps an already decoded surface.
    pub fn from_surface(surface: ImageSurface) -> Self {
        Self { surface }
    }

    /// Builds a source image from a raster snapshot.
    pub fn from_raster(raster: &Raster) -> Result<Self, EditorError> {
        Ok(Self::from_surface(raster.to_surface()?))
    }

    /// Decodes a PNG held in memory.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, EditorError> {
        let surface = ImageSurface::create_from_png(&mut Cursor::new(bytes))?;
        Ok(Self::from_surface(surface))
    }

    /// Decodes a PNG file.
    pub fn from_path(path: &Path) -> Result<Self, EditorError> {
        let mut reader = BufReader::new(File::open(path)?);
        let surface = ImageSurface::create_from_png(&mut reader)?;
        log::debug!(
            "Loaded source image {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Ok(Self::from_surface(surface))
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }
}

/// A previously saved mask used to pre-select regions when the editor opens.
///
/// White pixels are selected, black pixels are not; any size is accepted and
/// resampled to the current geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorMask {
    raster: Raster,
}

impl PriorMask {
    pub fn from_raster(raster: Raster) -> Self {
        Self { raster }
    }

    /// Decodes a PNG held in memory.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, EditorError> {
        Ok(Self::from_raster(Raster::decode_png(bytes)?))
    }

    /// Decodes a PNG file.
    pub fn from_path(path: &Path) -> Result<Self, EditorError> {
        let bytes = std::fs::read(path)?;
        Self::from_png_bytes(&bytes)
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Whether a mask pixel counts as selected.
    pub fn is_white(pixel: u32) -> bool {
        argb_luma(pixel) >= 128
    }

    /// Overlay contents for this mask at `geometry`: highlight where the mask is
    /// white, fully transparent elsewhere.
    pub fn to_overlay(&self, geometry: DisplayGeometry, highlight: Color) -> Raster {
        let tint = highlight.to_argb32();
        self.raster
            .resample_nearest(geometry.width, geometry.height)
            .map(|p| if Self::is_white(p) { tint } else { 0 })
    }
}
