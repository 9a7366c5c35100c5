//! Mask editor: stroke rendering, mask transforms, and export.
//!
//! [`MaskEditor`] owns the overlay and brush for one editing session
//! (opened → edited → saved or closed). Pointer handling is expressed as three
//! explicit lifecycle calls (`start_stroke`, `continue_stroke`, `end_stroke`)
//! so the stroke state machine does not depend on any event loop.
//!
//! Every operation is a silent no-op until the surfaces have been laid out.

pub mod brush;
mod export;
mod stroke;
mod transform;


pub use brush::{BrushMode, BrushState, MAX_DIAMETER, MIN_DIAMETER};
pub use export::{ExportedMask, binarize};
pub use transform::invert_overlay;

pub use crate::error::EditorError;

use crate::config::{Config, ResizePolicy};
use crate::draw::{Color, Ink, Raster, StrokeStyle};
use crate::surface::{DisplayGeometry, PriorMask, SourceImage, SurfaceManager, SurfaceSet};
use crate::util::Point;
use log::info;

/// Interactive mask editor state.
#[derive(Debug)]
pub struct MaskEditor {
    /// Brush size and mode (changed only by explicit controls)
    pub brush: BrushState,
    /// Step used by `grow_brush` / `shrink_brush`
    pub brush_step: f64,
    highlight: Color,
    antialias: bool,
    resize_policy: ResizePolicy,
    export_filename: String,
    surfaces: Option<SurfaceManager>,
    /// Last point of the stroke in progress, if any
    stroke_last: Option<Point>,
}

impl MaskEditor {
    /// Creates an editor with no image; call [`open`](Self::open) and
    /// [`layout`](Self::layout) before drawing.
    pub fn new(config: &Config) -> Self {
        Self {
            brush: BrushState::new(config.brush.default_diameter, config.brush.default_mode),
            brush_step: config.brush.step,
            highlight: config.highlight.to_color(),
            antialias: config.surface.antialias,
            resize_policy: config.surface.resize_policy,
            export_filename: config.export.filename.clone(),
            surfaces: None,
            stroke_last: None,
        }
    }

    /// Starts a session on `source`, optionally pre-selecting `prior`'s white pixels.
    ///
    /// Discards any previous session state. Surfaces are not allocated until the
    /// first [`layout`](Self::layout).
    pub fn open(&mut self, source: SourceImage, prior: Option<PriorMask>) {
        info!(
            "Opening mask editor on {}x{} source{}",
            source.width(),
            source.height(),
            if prior.is_some() { " with prior mask" } else { "" }
        );
        self.surfaces = Some(SurfaceManager::new(
            source,
            prior,
            self.highlight,
            self.resize_policy,
        ));
        self.stroke_last = None;
    }

    /// Fits the surfaces into the container; call on open and on every resize.
    ///
    /// Any stroke in progress is ended. Returns the resulting geometry, or
    /// `None` if nothing is open or the container has never had a usable size.
    pub fn layout(
        &mut self,
        container_width: u32,
        container_height: u32,
    ) -> Result<Option<DisplayGeometry>, EditorError> {
        self.stroke_last = None;
        match self.surfaces.as_mut() {
            Some(manager) => manager.layout(container_width, container_height),
            None => Ok(None),
        }
    }

    /// Current display geometry, once laid out.
    pub fn geometry(&self) -> Option<DisplayGeometry> {
        self.surfaces.as_ref().and_then(SurfaceManager::geometry)
    }

    /// Whether drawing surfaces exist.
    pub fn is_ready(&self) -> bool {
        self.surfaces.as_ref().is_some_and(SurfaceManager::is_ready)
    }

    /// Read-only access to the surfaces, for display.
    pub fn surfaces(&self) -> Option<&SurfaceSet> {
        self.surfaces.as_ref().and_then(SurfaceManager::surfaces)
    }

    /// Highlight color used for selected pixels.
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// File name the exported mask is attached under.
    pub fn export_filename(&self) -> &str {
        &self.export_filename
    }

    /// Snapshot of the overlay pixels.
    pub fn overlay_snapshot(&mut self) -> Result<Option<Raster>, EditorError> {
        match self.ready_surfaces() {
            Some(surfaces) => surfaces.overlay_snapshot().map(Some),
            None => Ok(None),
        }
    }

    /// Background with the overlay composited on top.
    pub fn render_preview(&self) -> Result<Option<cairo::ImageSurface>, EditorError> {
        match self.surfaces() {
            Some(surfaces) => surfaces.render_preview().map(Some),
            None => Ok(None),
        }
    }

    /// Increases the brush diameter by one step.
    pub fn grow_brush(&mut self) {
        self.brush.adjust_diameter(self.brush_step);
    }

    /// Decreases the brush diameter by one step.
    pub fn shrink_brush(&mut self) {
        self.brush.adjust_diameter(-self.brush_step);
    }

    /// Grows (positive) or shrinks (negative) the brush by whole steps.
    pub fn step_brush(&mut self, steps: i32) {
        self.brush.adjust_diameter(self.brush_step * steps as f64);
    }

    /// Ends the session without producing a mask.
    pub fn close(self) {
        info!("Mask editor closed without saving");
    }

    /// Brush style as of right now.
    fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            diameter: self.brush.diameter(),
            ink: match self.brush.mode {
                BrushMode::Paint => Ink::Highlight(self.highlight),
                BrushMode::Erase => Ink::Erase,
            },
            antialias: self.antialias,
        }
    }

    fn ready_surfaces(&mut self) -> Option<&mut SurfaceSet> {
        self.surfaces.as_mut().and_then(SurfaceManager::surfaces_mut)
    }

    fn mark_edited(&mut self) {
        if let Some(manager) = self.surfaces.as_mut() {
            manager.mark_edited();
        }
    }
}
