//! Error type shared by the surface manager, renderer, and exporter.

use thiserror::Error;

/// Errors that can occur while manipulating mask rasters.
///
/// An editor whose surfaces are not laid out yet never produces one of these;
/// operations on an unready editor are silent no-ops instead.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encode/decode failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Surface pixel data unavailable: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Raster size mismatch: expected {expected:?}, got {actual:?}")]
    RasterSizeMismatch {
        expected: (i32, i32),
        actual: (i32, i32),
    },
}
