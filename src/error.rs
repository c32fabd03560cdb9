//! Error types for GPS extraction and report writing

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for exif_gps_report operations
pub type Result<T> = std::result::Result<T, ExifGpsError>;

#[derive(Error, Debug)]
pub enum ExifGpsError {
    /// Input path does not exist
    #[error("Path or file '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// Filesystem access failed for a reason other than a missing path
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not one of the supported image types
    #[error("Not a valid image file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Image container or EXIF payload could not be parsed
    #[error("Failed to parse metadata of '{}': {message}", path.display())]
    MetadataParse {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The metadata tree has no such IFD
    #[error("IFD '{ifd}' not found")]
    IfdNotFound { ifd: String },

    /// The IFD exists but the tag is absent
    #[error("Tag 0x{tag:04x} not found in IFD '{ifd}'")]
    TagNotFound { ifd: String, tag: u16 },

    /// Tag payload is not a usable rational triple
    #[error("Invalid rational value: {reason}")]
    InvalidRational { reason: String },

    /// Directory traversal failed
    #[error("Error while walking through the directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Report could not be rendered or written
    #[error("Error writing report '{}': {message}", path.display())]
    ReportWrite {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ExifGpsError {
    /// Wrap a filesystem error, keeping `NotFound` as its own kind
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::PathNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a metadata parse error with context
    pub fn metadata<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::MetadataParse {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a report write error with context
    pub fn report<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ReportWrite {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Per-image failures that a directory scan logs and skips
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            ExifGpsError::Io { .. }
                | ExifGpsError::PathNotFound { .. }
                | ExifGpsError::UnsupportedFormat { .. }
                | ExifGpsError::MetadataParse { .. }
                | ExifGpsError::IfdNotFound { .. }
                | ExifGpsError::TagNotFound { .. }
                | ExifGpsError::InvalidRational { .. }
        )
    }
}
