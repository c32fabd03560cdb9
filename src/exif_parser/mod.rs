//! EXIF metadata loading and GPS extraction for JPEG and PNG images

pub mod generic;
pub mod jpeg;
pub mod png;
pub mod tree;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Exif, Reader};

use tracing::{debug, warn};

use crate::error::{ExifGpsError, Result};
use crate::utils::dotted_extension;

pub use generic::{dms_string, get_gps_coords, parse_rationals, GpsCoordinates, GpsRational};
pub use jpeg::JpegSource;
pub use png::PngSource;
pub use tree::{Ifd, MetadataTree, TagEntry, ValueKind};

/// A container format whose EXIF block kamadak-exif can decode
pub trait MetadataSource {
    /// Locates and decodes the EXIF block with an already configured reader
    fn read_exif(
        &self,
        exif_reader: &Reader,
        file: &mut BufReader<File>,
    ) -> std::result::Result<Exif, exif::Error>;

    /// Opens the file and builds its metadata tree
    fn parse(&self, path: &Path) -> Result<MetadataTree> {
        let file = File::open(path).map_err(|e| ExifGpsError::io(path, e))?;
        let mut buf_reader = BufReader::new(file);
        let mut exif_reader = Reader::new();
        exif_reader.continue_on_error(true); // Tolerate non-standard EXIF structures

        build_tree(path, self.read_exif(&exif_reader, &mut buf_reader))
    }
}

/// Supported image containers, resolved once from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match dotted_extension(path).as_deref() {
            Some(".jpg") | Some(".jpeg") => Ok(ImageFormat::Jpeg),
            Some(".png") => Ok(ImageFormat::Png),
            _ => Err(ExifGpsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn source(self) -> &'static dyn MetadataSource {
        match self {
            ImageFormat::Jpeg => &JpegSource,
            ImageFormat::Png => &PngSource,
        }
    }
}

/// Turns a decode result into a tree, keeping whatever survived recoverable errors
pub fn build_tree(
    path: &Path,
    decoded: std::result::Result<Exif, exif::Error>,
) -> Result<MetadataTree> {
    let tree = match decoded {
        Ok(exif) => MetadataTree::from_exif(&exif),
        Err(exif::Error::PartialResult(partial)) => {
            let (exif, errors) = partial.into_inner();
            warn!(
                "EXIF in {} only partially parsed ({} error(s))",
                path.display(),
                errors.len()
            );
            MetadataTree::from_exif(&exif)
        }
        Err(e) => return Err(ExifGpsError::metadata(path, "invalid EXIF data", e)),
    };

    let layout: Vec<String> = tree
        .ifd_paths()
        .map(|ifd| format!("{}({})", ifd, tree.ifd(ifd).map_or(0, Ifd::len)))
        .collect();
    debug!("{}: IFDs [{}]", path.display(), layout.join(", "));
    Ok(tree)
}

/// Loads the metadata tree of a `.jpg`, `.jpeg` or `.png` file
pub fn read_metadata(path: &Path) -> Result<MetadataTree> {
    ImageFormat::from_path(path)?.source().parse(path)
}

/// Extracts latitude and longitude strings from an image
pub fn read_gps(path: &Path) -> Result<GpsCoordinates> {
    let tree = read_metadata(path)?;
    get_gps_coords(&tree)
}
