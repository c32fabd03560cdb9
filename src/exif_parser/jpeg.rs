use std::fs::File;
use std::io::BufReader;

use exif::{Exif, Reader};

use super::MetadataSource;

/// JPEG container: EXIF lives in the APP1 segment tagged `Exif\0\0`
pub struct JpegSource;

impl MetadataSource for JpegSource {
    fn read_exif(
        &self,
        exif_reader: &Reader,
        file: &mut BufReader<File>,
    ) -> Result<Exif, exif::Error> {
        let payload = exif::get_exif_attr_from_jpeg(file)?;
        exif_reader.read_raw(payload)
    }
}
