use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::constants::{DEFAULT_CSV_OUTPUT, DEFAULT_HTML_OUTPUT, REPORT_HEADER};
use crate::error::{ExifGpsError, Result};
use crate::html_template::write_html;
use crate::processing::ImageRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Html,
}

impl ReportFormat {
    pub fn default_output(self) -> &'static str {
        match self {
            ReportFormat::Csv => DEFAULT_CSV_OUTPUT,
            ReportFormat::Html => DEFAULT_HTML_OUTPUT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Html => "HTML",
        }
    }
}

/// Writes header plus one row per record. Returns the number of rows written.
/// A failed row is logged and skipped; header and flush failures are fatal.
pub fn write_csv_to<W: Write>(records: &[ImageRecord], out: W, path: &Path) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer
        .write_record(REPORT_HEADER)
        .map_err(|e| ExifGpsError::report(path, "failed to write CSV header", e))?;

    let mut written = 0;
    for record in records {
        match writer.serialize(record) {
            Ok(()) => written += 1,
            Err(e) => warn!("Error writing CSV row for {}: {}", record.file_path, e),
        }
    }

    writer
        .flush()
        .map_err(|e| ExifGpsError::report(path, "failed to flush CSV file", e))?;
    Ok(written)
}

pub fn write_csv(records: &[ImageRecord], path: &Path) -> Result<usize> {
    let file = File::create(path)
        .map_err(|e| ExifGpsError::report(path, "failed to create CSV file", e))?;
    write_csv_to(records, file, path)
}

pub fn write_report(records: &[ImageRecord], format: ReportFormat, path: &Path) -> Result<()> {
    match format {
        ReportFormat::Csv => write_csv(records, path).map(|_| ()),
        ReportFormat::Html => write_html(records, path),
    }
}
