//! Extract GPS coordinates from JPEG/PNG EXIF metadata and write them
//! to a CSV or HTML report.
//!
//! The pipeline is single-threaded: classify the input path, walk it if it
//! is a directory, extract the GPS IFD latitude/longitude of every supported
//! image and hand the collected records to the report writer.

pub mod constants;
pub mod error;
pub mod exif_parser;
pub mod html_template;
pub mod processing;
pub mod report;
pub mod settings;
pub mod utils;

use anyhow::{Context, Result};

pub use error::ExifGpsError;
pub use exif_parser::{read_gps, GpsCoordinates, ImageFormat};
pub use processing::{collect_records, ImageRecord, ProcessingStats, ScanOutcome};
pub use report::{write_report, ReportFormat};
pub use settings::{Cli, Settings};

/// Scans `settings.input` and writes the report. Returns what was found.
pub fn run(settings: &Settings) -> Result<ScanOutcome> {
    let outcome = collect_records(&settings.input)
        .with_context(|| format!("Failed to read GPS data from {}", settings.input.display()))?;

    write_report(&outcome.records, settings.format, &settings.output)
        .with_context(|| format!("Error writing {} file", settings.format.label()))?;

    println!(
        "{} file created successfully! ({} record(s) → {})",
        settings.format.label(),
        outcome.records.len(),
        settings.output.display()
    );

    Ok(outcome)
}
