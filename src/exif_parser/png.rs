use std::fs::File;
use std::io::BufReader;

use exif::{Exif, Reader};

use super::MetadataSource;

/// PNG container: EXIF lives in the `eXIf` chunk, located by kamadak-exif
pub struct PngSource;

impl MetadataSource for PngSource {
    fn read_exif(
        &self,
        exif_reader: &Reader,
        file: &mut BufReader<File>,
    ) -> Result<Exif, exif::Error> {
        exif_reader.read_from_container(file)
    }
}
