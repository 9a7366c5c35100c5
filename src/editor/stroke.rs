use super::{EditorError, MaskEditor};
use crate::draw::{self, Ink, StrokeStyle};
use crate::surface::SurfaceSet;
use crate::util::Point;
use cairo::Context;
use log::{debug, warn};

/// Paint draws straight onto the overlay; erase clears whatever its stamp touches.
fn apply_brush<F>(surfaces: &mut SurfaceSet, style: &StrokeStyle, f: F) -> Result<(), EditorError>
where
    F: FnOnce(&Context),
{
    match style.ink {
        Ink::Highlight(_) => surfaces.draw_overlay(f),
        Ink::Erase => surfaces.erase_overlay(f),
    }
}

impl MaskEditor {
    /// Begins a stroke at `point` (overlay-local coordinates).
    ///
    /// A dot of the current brush diameter is drawn immediately, so a click
    /// without drag still marks the point.
    pub fn start_stroke(&mut self, point: Point) -> Result<(), EditorError> {
        let style = self.stroke_style();
        let Some(surfaces) = self.ready_surfaces() else {
            warn!("Ignoring stroke start: surfaces not laid out yet");
            return Ok(());
        };

        apply_brush(surfaces, &style, |ctx| draw::render_dot(ctx, point, &style))?;
        debug!(
            "Stroke started at ({:.1}, {:.1}), diameter {:.1}, {:?}",
            point.x,
            point.y,
            style.diameter,
            self.brush.mode
        );
        self.stroke_last = Some(point);
        self.mark_edited();
        Ok(())
    }

    /// Extends the stroke in progress to `point`.
    ///
    /// Brush diameter and mode are read now, so changes made mid-stroke apply
    /// from this segment on. Does nothing when no stroke is in progress.
    pub fn continue_stroke(&mut self, point: Point) -> Result<(), EditorError> {
        let Some(from) = self.stroke_last else {
            return Ok(());
        };
        let style = self.stroke_style();
        let Some(surfaces) = self.ready_surfaces() else {
            self.stroke_last = None;
            return Ok(());
        };

        apply_brush(surfaces, &style, |ctx| {
            draw::render_segment(ctx, from, point, &style)
        })?;
        self.stroke_last = Some(point);
        self.mark_edited();
        Ok(())
    }

    /// Finishes the stroke in progress. Segments are already applied, so this
    /// only drops the path continuity.
    pub fn end_stroke(&mut self) {
        self.stroke_last = None;
    }

    /// Whether a stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.stroke_last.is_some()
    }

    /// Draws a complete stroke along `points`.
    pub fn stroke_path(&mut self, points: &[Point]) -> Result<(), EditorError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.start_stroke(*first)?;
        for point in rest {
            self.continue_stroke(*point)?;
        }
        self.end_stroke();
        Ok(())
    }
}
