use std::fs;
use std::path::Path;

use maud::{html, Markup, DOCTYPE};

use crate::constants::REPORT_HEADER;
use crate::error::{ExifGpsError, Result};
use crate::processing::ImageRecord;

// Report page: one header row, then one row per record. Cell text is escaped by maud.
fn report_page(records: &[ImageRecord]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { "Image Details" }
            }
            body {
                h1 { "Image Details" }
                table {
                    tr {
                        @for title in REPORT_HEADER {
                            th { (title) }
                        }
                    }
                    @for record in records {
                        tr {
                            td { (record.file_path) }
                            td { (record.latitude) }
                            td { (record.longitude) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_html(records: &[ImageRecord]) -> String {
    report_page(records).into_string()
}

/// Renders the whole page and writes it in one go; any failure aborts
pub fn write_html(records: &[ImageRecord], path: &Path) -> Result<()> {
    let html = render_html(records);
    fs::write(path, html).map_err(|e| ExifGpsError::report(path, "failed to write HTML file", e))
}
