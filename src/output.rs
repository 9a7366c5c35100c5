//! Writing exported masks to disk.

use crate::editor::{EditorError, ExportedMask};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), EditorError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Save the mask's PNG blob to `path`.
///
/// Missing parent directories are created. Returns the path written.
pub fn save_mask(mask: &ExportedMask, path: &Path) -> Result<PathBuf, EditorError> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let bytes = mask.png_bytes();
    log::info!(
        "Saving {}x{} mask to: {} ({} bytes)",
        mask.width(),
        mask.height(),
        path.display(),
        bytes.len()
    );
    fs::write(path, bytes)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(path.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
