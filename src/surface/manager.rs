//! Background and overlay surfaces, and the layout logic that keeps them aligned.

use super::geometry::DisplayGeometry;
use super::source::{PriorMask, SourceImage};
use crate::config::ResizePolicy;
use crate::draw::{self, Color, Raster};
use crate::error::EditorError;
use crate::util::Point;
use cairo::{Context, Format, ImageSurface};
use log::debug;

/// Two equally sized raster surfaces: the scaled source image and the
/// translucent selection overlay drawn on top of it.
pub struct SurfaceSet {
    geometry: DisplayGeometry,
    background: ImageSurface,
    overlay: ImageSurface,
}

impl std::fmt::Debug for SurfaceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceSet")
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl SurfaceSet {
    /// Allocates a blank background and a fully transparent overlay.
    pub fn new(geometry: DisplayGeometry) -> Result<Self, EditorError> {
        Ok(Self {
            geometry,
            background: ImageSurface::create(Format::ARgb32, geometry.width, geometry.height)?,
            overlay: ImageSurface::create(Format::ARgb32, geometry.width, geometry.height)?,
        })
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn background(&self) -> &ImageSurface {
        &self.background
    }

    pub fn overlay(&self) -> &ImageSurface {
        &self.overlay
    }

    /// Repaints the background from `source`, scaled to the current geometry.
    pub fn redraw_background(&mut self, source: &SourceImage) -> Result<(), EditorError> {
        let ctx = Context::new(&self.background)?;
        draw::render_background(
            &ctx,
            source.surface(),
            self.geometry.width,
            self.geometry.height,
        )?;
        Ok(())
    }

    /// Replaces the overlay with the prior mask's selection, or clears it.
    pub fn seed_overlay(
        &mut self,
        prior: Option<&PriorMask>,
        highlight: Color,
    ) -> Result<(), EditorError> {
        let seeded = match prior {
            Some(mask) => mask.to_overlay(self.geometry, highlight),
            None => Raster::new(self.geometry.width, self.geometry.height),
        };
        self.commit_overlay(&seeded)
    }

    /// Runs `f` with a drawing context targeting the overlay.
    ///
    /// The context is dropped before returning so the overlay pixels can be
    /// borrowed again.
    pub fn draw_overlay<F>(&mut self, f: F) -> Result<(), EditorError>
    where
        F: FnOnce(&Context),
    {
        let ctx = Context::new(&self.overlay)?;
        f(&ctx);
        drop(ctx);
        self.overlay.flush();
        Ok(())
    }

    /// Runs `f` against a scratch stamp surface, then clears every overlay
    /// pixel the stamp touched, however faintly.
    ///
    /// Anti-aliased edges are removed completely, so erasing a painted path
    /// with the same brush leaves no residue.
    pub fn erase_overlay<F>(&mut self, f: F) -> Result<(), EditorError>
    where
        F: FnOnce(&Context),
    {
        let mut stamp =
            ImageSurface::create(Format::ARgb32, self.geometry.width, self.geometry.height)?;
        {
            let ctx = Context::new(&stamp)?;
            f(&ctx);
        }
        let stamp = Raster::from_surface(&mut stamp)?;
        let mut overlay = self.overlay_snapshot()?;
        overlay.erase_stamped(&stamp)?;
        self.commit_overlay(&overlay)
    }

    /// Reads a full snapshot of the overlay.
    pub fn overlay_snapshot(&mut self) -> Result<Raster, EditorError> {
        Raster::from_surface(&mut self.overlay)
    }

    /// Overwrites the overlay with `raster`.
    pub fn commit_overlay(&mut self, raster: &Raster) -> Result<(), EditorError> {
        raster.commit(&mut self.overlay)
    }

    /// Reads a full snapshot of the background.
    pub fn background_snapshot(&mut self) -> Result<Raster, EditorError> {
        Raster::from_surface(&mut self.background)
    }

    /// Flattens background and overlay into one surface, as displayed.
    pub fn render_preview(&self) -> Result<ImageSurface, EditorError> {
        let preview =
            ImageSurface::create(Format::ARgb32, self.geometry.width, self.geometry.height)?;
        {
            let ctx = Context::new(&preview)?;
            draw::render_layer(&ctx, &self.background)?;
            draw::render_layer(&ctx, &self.overlay)?;
        }
        preview.flush();
        Ok(preview)
    }

    /// Maps a pointer position to overlay coordinates given the on-screen
    /// position of the overlay's top-left corner.
    pub fn to_local(&self, pointer: Point, surface_origin: Point) -> Point {
        pointer.relative_to(surface_origin)
    }
}

/// Owns the editing inputs and (re)builds the [`SurfaceSet`] whenever the
/// container size changes.
#[derive(Debug)]
pub struct SurfaceManager {
    source: SourceImage,
    prior: Option<PriorMask>,
    highlight: Color,
    policy: ResizePolicy,
    surfaces: Option<SurfaceSet>,
    /// Whether the overlay has been drawn on since it was last seeded
    overlay_edited: bool,
}

impl SurfaceManager {
    pub fn new(
        source: SourceImage,
        prior: Option<PriorMask>,
        highlight: Color,
        policy: ResizePolicy,
    ) -> Self {
        Self {
            source,
            prior,
            highlight,
            policy,
            surfaces: None,
            overlay_edited: false,
        }
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn prior(&self) -> Option<&PriorMask> {
        self.prior.as_ref()
    }

    pub fn geometry(&self) -> Option<DisplayGeometry> {
        self.surfaces.as_ref().map(SurfaceSet::geometry)
    }

    pub fn surfaces(&self) -> Option<&SurfaceSet> {
        self.surfaces.as_ref()
    }

    pub fn surfaces_mut(&mut self) -> Option<&mut SurfaceSet> {
        self.surfaces.as_mut()
    }

    pub fn is_ready(&self) -> bool {
        self.surfaces.is_some()
    }

    /// Records that the overlay now holds in-session edits.
    pub fn mark_edited(&mut self) {
        self.overlay_edited = true;
    }

    /// Fits the surfaces into a `container_width` x `container_height` area.
    ///
    /// Repeated calls with the same container produce identical surfaces. A
    /// geometry change reallocates both surfaces, redraws the background, and
    /// rebuilds the overlay according to the resize policy. An empty container
    /// leaves the current surfaces untouched.
    pub fn layout(
        &mut self,
        container_width: u32,
        container_height: u32,
    ) -> Result<Option<DisplayGeometry>, EditorError> {
        let Some(geometry) = DisplayGeometry::fit_inside(
            self.source.width(),
            self.source.height(),
            container_width,
            container_height,
        ) else {
            debug!("Container {container_width}x{container_height} has no usable area");
            return Ok(self.geometry());
        };

        if let Some(current) = self.surfaces.as_mut()
            && current.geometry() == geometry
        {
            current.redraw_background(&self.source)?;
            return Ok(Some(geometry));
        }

        let carried = match (self.policy, self.surfaces.as_mut()) {
            (ResizePolicy::Preserve, Some(previous)) if self.overlay_edited => Some(
                previous
                    .overlay_snapshot()?
                    .resample_nearest(geometry.width, geometry.height),
            ),
            _ => None,
        };

        let mut surfaces = SurfaceSet::new(geometry)?;
        surfaces.redraw_background(&self.source)?;
        match carried {
            Some(overlay) => surfaces.commit_overlay(&overlay)?,
            None => {
                surfaces.seed_overlay(self.prior.as_ref(), self.highlight)?;
                self.overlay_edited = false;
            }
        }

        debug!(
            "Laid out surfaces at {}x{} (container {}x{}, source {}x{})",
            geometry.width,
            geometry.height,
            container_width,
            container_height,
            self.source.width(),
            self.source.height()
        );
        self.surfaces = Some(surfaces);
        Ok(Some(geometry))
    }
}
