use std::fs;
use std::path::Path;
use tracing::info;

use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{ExifGpsError, Result};

/// What the input path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Checks that the path exists and tells a directory from anything else
pub fn classify_path(path: &Path) -> Result<PathKind> {
    let metadata = fs::metadata(path).map_err(|e| ExifGpsError::io(path, e))?;

    if metadata.is_dir() {
        Ok(PathKind::Directory)
    } else {
        Ok(PathKind::File)
    }
}

/// Extension of the last path component including the dot, e.g. `.jpg`.
/// A leading dot counts, so `.png` on its own yields `.png`.
pub fn dotted_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rfind('.').map(|idx| name[idx..].to_string())
}

/// Returns true for `.jpg`, `.jpeg` and `.png` (exact, case-sensitive)
pub fn is_supported_image(path: &Path) -> bool {
    let supported = dotted_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    if !supported {
        info!("Not a valid image file format: {}", path.display());
    }
    supported
}
