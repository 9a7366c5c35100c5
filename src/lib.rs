//! Mask authoring for generative image edits.
//!
//! A user paints a translucent highlight over a source image to select the
//! region a model should regenerate. The editor keeps a scaled background and
//! an overlay surface in lockstep, supports paint/erase strokes, clear and
//! invert, and exports the selection as a strict black/white PNG at display
//! resolution.
//!
//! ```no_run
//! use inpaint_mask::{Config, MaskEditor, SourceImage, util::Point};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut editor = MaskEditor::new(&Config::default());
//! editor.open(SourceImage::from_path("photo.png".as_ref())?, None);
//! editor.layout(800, 600)?;
//! editor.stroke_path(&[Point::new(10.0, 10.0), Point::new(200.0, 150.0)])?;
//! if let Some(mask) = editor.export_mask()? {
//!     inpaint_mask::output::save_mask(&mask, "mask.png".as_ref())?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod draw;
pub mod editor;
pub mod error;
pub mod output;
pub mod session;
pub mod surface;
pub mod util;

pub use config::Config;
pub use editor::{BrushMode, ExportedMask, MaskEditor};
pub use error::EditorError;
pub use surface::{DisplayGeometry, PriorMask, SourceImage};
