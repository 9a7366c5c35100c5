//! Cairo-based rendering functions for brush strokes and the background image.

use super::color::Color;
use crate::util::Point;

/// What a brush deposits on the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ink {
    /// Replace covered pixels with the highlight color.
    ///
    /// Uses Cairo's bounded SOURCE operator, so painting over already
    /// highlighted pixels never pushes their alpha above the highlight's own.
    Highlight(Color),
    /// Stamp touched pixels opaque white.
    ///
    /// Erase strokes are drawn onto a scratch surface; every pixel the stamp
    /// touches is then cleared from the overlay in full.
    Erase,
}

/// Brush parameters captured at the moment a segment is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Brush diameter in surface pixels
    pub diameter: f64,
    /// Paint or erase
    pub ink: Ink,
    /// Whether edges are anti-aliased
    pub antialias: bool,
}

fn apply_style(ctx: &cairo::Context, style: &StrokeStyle) {
    match style.ink {
        Ink::Highlight(color) => {
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        }
        Ink::Erase => {
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_rgba(1.0, 1.0, 1.0, 1.0);
        }
    }
    ctx.set_antialias(if style.antialias {
        cairo::Antialias::Default
    } else {
        cairo::Antialias::None
    });
}

/// Renders a filled disc of the brush diameter centred on `center`.
///
/// Used when a stroke begins so a click without drag still marks a point.
pub fn render_dot(ctx: &cairo::Context, center: Point, style: &StrokeStyle) {
    let _ = ctx.save();
    apply_style(ctx, style);
    ctx.arc(
        center.x,
        center.y,
        style.diameter / 2.0,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    let _ = ctx.fill();
    let _ = ctx.restore();
}

/// Renders one round-capped, round-joined segment of a freehand stroke.
pub fn render_segment(ctx: &cairo::Context, from: Point, to: Point, style: &StrokeStyle) {
    let _ = ctx.save();
    apply_style(ctx, style);
    ctx.set_line_width(style.diameter);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Draws `source` scaled to fill a `width` x `height` target.
///
/// The caller picks dimensions with the source aspect ratio, so the scale is
/// uniform up to rounding.
pub fn render_background(
    ctx: &cairo::Context,
    source: &cairo::ImageSurface,
    width: i32,
    height: i32,
) -> Result<(), cairo::Error> {
    if source.width() <= 0 || source.height() <= 0 {
        return Ok(());
    }

    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.scale(
        width as f64 / source.width() as f64,
        height as f64 / source.height() as f64,
    );
    ctx.set_source_surface(source, 0.0, 0.0)?;
    let pattern = ctx.source();
    pattern.set_filter(cairo::Filter::Good);
    pattern.set_extend(cairo::Extend::Pad);
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}

/// Composites `layer` over whatever is already on the context's target.
pub fn render_layer(ctx: &cairo::Context, layer: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_surface(layer, 0.0, 0.0)?;
    ctx.paint()?;
    ctx.restore()?;
    Ok(())
}
