use super::{EditorError, MaskEditor};
use crate::draw::color::argb_alpha;
use crate::draw::{Color, Raster};
use log::{info, warn};

/// Flips selected and unselected pixels of an overlay snapshot.
///
/// Pixels with any alpha become fully transparent; fully transparent pixels
/// become `highlight`. The result is a new buffer built only from the input
/// snapshot, so no pixel is read after being written.
pub fn invert_overlay(snapshot: &Raster, highlight: Color) -> Raster {
    let tint = highlight.to_argb32();
    snapshot.map(|p| if argb_alpha(p) > 0 { 0 } else { tint })
}

impl MaskEditor {
    /// Wipes the overlay to fully transparent. There is no undo.
    pub fn clear(&mut self) -> Result<(), EditorError> {
        self.stroke_last = None;
        let Some(surfaces) = self.ready_surfaces() else {
            warn!("Ignoring clear: surfaces not laid out yet");
            return Ok(());
        };

        let geometry = surfaces.geometry();
        surfaces.commit_overlay(&Raster::new(geometry.width, geometry.height))?;
        info!("Cleared mask overlay");
        self.mark_edited();
        Ok(())
    }

    /// Swaps selected and unselected regions of the overlay.
    ///
    /// Two-phase: the whole overlay is snapshotted first, then the inverted
    /// buffer is committed in one write.
    pub fn invert(&mut self) -> Result<(), EditorError> {
        self.stroke_last = None;
        let highlight = self.highlight;
        let Some(surfaces) = self.ready_surfaces() else {
            warn!("Ignoring invert: surfaces not laid out yet");
            return Ok(());
        };

        let snapshot = surfaces.overlay_snapshot()?;
        let inverted = invert_overlay(&snapshot, highlight);
        surfaces.commit_overlay(&inverted)?;
        info!(
            "Inverted mask overlay ({} -> {} selected pixels)",
            snapshot.coverage(),
            inverted.coverage()
        );
        self.mark_edited();
        Ok(())
    }
}
