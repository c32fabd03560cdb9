use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::report::ReportFormat;

/// Extract GPS coordinates from JPEG/PNG EXIF data into a CSV or HTML report
#[derive(Debug, Parser)]
#[command(name = "exif_gps_report", version, about, long_about = None)]
pub struct Cli {
    /// Path of image or directory
    #[arg(long, value_name = "PATH")]
    pub path: String,

    /// Save result as HTML instead of CSV
    #[arg(long)]
    pub html: bool,

    /// Report file to write (default: output.csv or output.html)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub format: ReportFormat,
    pub output: PathBuf,
}

impl Settings {
    /// Settings with the default output file for `format`
    pub fn new(input: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            input: input.into(),
            format,
            output: PathBuf::from(format.default_output()),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.path.trim().is_empty() {
            bail!("Please provide a file-path for an image.");
        }

        let format = if cli.html { ReportFormat::Html } else { ReportFormat::Csv };
        let settings = Settings::new(cli.path, format);

        Ok(match cli.output {
            Some(output) => settings.with_output(output),
            None => settings,
        })
    }
}
