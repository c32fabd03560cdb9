use ignore::WalkBuilder;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ExifGpsError, Result};
use crate::exif_parser::{read_gps, GpsCoordinates};
use crate::utils::{classify_path, is_supported_image, PathKind};

// One report row. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    #[serde(rename = "Image File Path")]
    pub file_path: String,
    #[serde(rename = "GPS Latitude")]
    pub latitude: String,
    #[serde(rename = "GPS Longitude")]
    pub longitude: String,
}

impl ImageRecord {
    pub fn new(path: &Path, coords: GpsCoordinates) -> Self {
        Self {
            file_path: path.to_string_lossy().to_string(),
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }
}

/// Counters collected while scanning
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files_seen: usize,
    pub images: usize,
    pub extracted: usize,
    pub skipped: usize,
    pub ignored: usize,
}

impl ProcessingStats {
    pub fn print_summary(&self) {
        println!("\n📊 Processing statistics:");
        println!("   🔍 Files checked: {}", self.files_seen);
        println!("   📸 Supported images: {}", self.images);
        println!("   🗺️  With GPS data: {}", self.extracted);
        println!("   ❌ Skipped (no GPS / unreadable): {}", self.skipped);
        println!("   📄 Not an image: {}", self.ignored);
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<ImageRecord>,
    pub stats: ProcessingStats,
}

/// Single-file mode: any failure is returned to the caller
pub fn process_single_file(path: &Path) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    outcome.stats.files_seen = 1;

    if !is_supported_image(path) {
        return Err(ExifGpsError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    outcome.stats.images = 1;

    let coords = read_gps(path)?;
    outcome.records.push(ImageRecord::new(path, coords));
    outcome.stats.extracted = 1;

    Ok(outcome)
}

/// Directory mode: walks the tree depth-first in file-name order.
/// Per-image failures are logged and skipped; a walk error aborts.
pub fn process_directory(root: &Path) -> Result<ScanOutcome> {
    info!("🔍 Scanning directory: {}", root.display());

    // No ignore-file or hidden-file filtering, every entry is visited
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut outcome = ScanOutcome::default();

    for entry in walker {
        let entry = entry?;
        if entry.file_type().map_or(false, |ft| ft.is_dir()) {
            continue;
        }

        let path = entry.path();
        outcome.stats.files_seen += 1;

        if !is_supported_image(path) {
            outcome.stats.ignored += 1;
            continue;
        }
        outcome.stats.images += 1;

        match read_gps(path) {
            Ok(coords) => {
                debug!("{}: lat '{}' lng '{}'", path.display(), coords.latitude, coords.longitude);
                outcome.records.push(ImageRecord::new(path, coords));
                outcome.stats.extracted += 1;
            }
            Err(e) if e.is_skippable() => {
                warn!("Failed to read EXIF data from {}: {}", path.display(), e);
                outcome.stats.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "✅ Scanned {} files, {} with GPS data",
        outcome.stats.files_seen, outcome.stats.extracted
    );
    Ok(outcome)
}

/// Classifies the input and runs the matching mode
pub fn collect_records(input: &Path) -> Result<ScanOutcome> {
    match classify_path(input)? {
        PathKind::File => process_single_file(input),
        PathKind::Directory => process_directory(input),
    }
}
