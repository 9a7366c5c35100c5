use super::{Session, SessionAction};
use crate::editor::MaskEditor;
use crate::util::Point;
use anyhow::{Context, Result};
use log::debug;

/// How a replayed session wants to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Export the mask and hand it to the caller.
    Save,
    /// Discard everything; emit nothing.
    Close,
}

/// Applies `session` to `editor` in order.
///
/// Stops at the first `save` or `close`; running off the end of the script
/// counts as `save`. The editor is left open so the caller can still render
/// a preview before finishing it.
pub fn replay(editor: &mut MaskEditor, session: &Session) -> Result<SessionEnd> {
    for (index, action) in session.actions.iter().enumerate() {
        debug!("Session action {index}: {action:?}");
        match action {
            SessionAction::Save => return Ok(SessionEnd::Save),
            SessionAction::Close => return Ok(SessionEnd::Close),
            other => apply(editor, other)
                .with_context(|| format!("session action {index} ({other:?}) failed"))?,
        }
    }
    Ok(SessionEnd::Save)
}

fn apply(editor: &mut MaskEditor, action: &SessionAction) -> Result<()> {
    match action {
        SessionAction::Brush {
            diameter,
            steps,
            adjust,
            mode,
        } => {
            if let Some(diameter) = diameter {
                editor.brush.set_diameter(*diameter);
            }
            if let Some(steps) = steps {
                editor.step_brush(*steps);
            }
            if let Some(delta) = adjust {
                editor.brush.adjust_diameter(*delta);
            }
            if let Some(mode) = mode {
                editor.brush.mode = *mode;
            }
        }
        SessionAction::Stroke { points, origin } => {
            let origin = origin.map(|[x, y]| Point::new(x, y));
            let points: Vec<Point> = points
                .iter()
                .map(|&[x, y]| {
                    let pointer = Point::new(x, y);
                    match (origin, editor.surfaces()) {
                        (Some(origin), Some(surfaces)) => surfaces.to_local(pointer, origin),
                        _ => pointer,
                    }
                })
                .collect();
            editor.stroke_path(&points)?;
        }
        SessionAction::Invert => editor.invert()?,
        SessionAction::Clear => editor.clear()?,
        SessionAction::Resize { width, height } => {
            editor.layout(*width, *height)?;
        }
        SessionAction::Save | SessionAction::Close => {}
    }
    Ok(())
}
