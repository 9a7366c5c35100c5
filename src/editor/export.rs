use super::{EditorError, MaskEditor};
use crate::draw::color::argb_alpha;
use crate::draw::{MASK_BLACK, MASK_WHITE, Raster};
use crate::surface::{DisplayGeometry, PriorMask};
use log::{info, warn};

/// Converts an overlay snapshot into a strict black/white mask.
///
/// Any non-zero alpha becomes opaque white, zero alpha becomes opaque black.
/// Alpha magnitude and anti-aliased edges are not preserved.
pub fn binarize(overlay: &Raster) -> Raster {
    overlay.map(|p| {
        if argb_alpha(p) > 0 {
            MASK_WHITE
        } else {
            MASK_BLACK
        }
    })
}

/// A finished binary mask, owned by whoever requested the export.
///
/// Carries both the encoded PNG blob (for attaching to a request) and the
/// decoded raster (for redisplay or reopening as a prior mask).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedMask {
    geometry: DisplayGeometry,
    filename: String,
    png: Vec<u8>,
    raster: Raster,
}

impl ExportedMask {
    /// Binarizes `overlay` and encodes it as PNG.
    pub fn from_overlay(overlay: &Raster, filename: &str) -> Result<Self, EditorError> {
        let raster = binarize(overlay);
        let png = raster.encode_png()?;
        Ok(Self {
            geometry: DisplayGeometry {
                width: raster.width(),
                height: raster.height(),
            },
            filename: filename.to_string(),
            png,
            raster,
        })
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn width(&self) -> i32 {
        self.geometry.width
    }

    pub fn height(&self) -> i32 {
        self.geometry.height
    }

    /// File name the blob is attached under (`mask.png` by default).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Encoded PNG blob.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Consumes the mask, returning the PNG blob.
    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Decoded black/white raster, suitable for redisplay.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Whether `(x, y)` is selected (white). Out-of-bounds pixels are not.
    pub fn is_selected(&self, x: i32, y: i32) -> bool {
        self.raster.get(x, y) == Some(MASK_WHITE)
    }

    /// Number of white pixels.
    pub fn selected_count(&self) -> usize {
        self.raster.pixels().iter().filter(|&&p| p == MASK_WHITE).count()
    }

    /// Reuses this mask as the starting selection of a new editing session.
    pub fn to_prior_mask(&self) -> PriorMask {
        PriorMask::from_raster(self.raster.clone())
    }
}

impl MaskEditor {
    /// Produces a binary mask from the current overlay.
    ///
    /// The mask always has the current display geometry. Returns `None` when
    /// the surfaces are not laid out yet.
    pub fn export_mask(&mut self) -> Result<Option<ExportedMask>, EditorError> {
        let filename = self.export_filename.clone();
        let Some(surfaces) = self.ready_surfaces() else {
            warn!("Ignoring export: surfaces not laid out yet");
            return Ok(None);
        };

        let snapshot = surfaces.overlay_snapshot()?;
        let mask = ExportedMask::from_overlay(&snapshot, &filename)?;
        info!(
            "Exported {}x{} mask ({} selected pixels, {} bytes)",
            mask.width(),
            mask.height(),
            mask.selected_count(),
            mask.png_bytes().len()
        );
        Ok(Some(mask))
    }

    /// Exports the mask, hands it to `on_save`, and ends the session.
    ///
    /// Returns whether a mask was produced; `on_save` is not called when the
    /// surfaces were never laid out.
    pub fn save<F>(mut self, on_save: F) -> Result<bool, EditorError>
    where
        F: FnOnce(ExportedMask),
    {
        match self.export_mask()? {
            Some(mask) => {
                on_save(mask);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
