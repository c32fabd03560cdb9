use tracing::debug;

use super::tree::MetadataTree;
use crate::constants::{DMS_COMPONENTS, GPS_IFD, RATIONAL_SIZE, TAG_GPS_LATITUDE, TAG_GPS_LONGITUDE};
use crate::error::{ExifGpsError, Result};

/// Unsigned EXIF rational as stored in the GPS IFD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsRational {
    pub numerator: u32,
    pub denominator: u32,
}

impl GpsRational {
    /// Quotient as `f64`. A zero denominator is an error rather than inf/NaN.
    pub fn to_f64(self) -> Result<f64> {
        if self.denominator == 0 {
            return Err(ExifGpsError::InvalidRational {
                reason: format!("zero denominator in {}/0", self.numerator),
            });
        }
        Ok(f64::from(self.numerator) / f64::from(self.denominator))
    }
}

/// Latitude and longitude as space-separated D M S strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpsCoordinates {
    pub latitude: String,
    pub longitude: String,
}

/// Reads `count` big-endian rationals from the front of `data`
pub fn parse_rationals(data: &[u8], count: usize) -> Result<Vec<GpsRational>> {
    let needed = count * RATIONAL_SIZE;
    if data.len() < needed {
        return Err(ExifGpsError::InvalidRational {
            reason: format!(
                "expected {} bytes for {} rationals, got {}",
                needed,
                count,
                data.len()
            ),
        });
    }

    let rationals = data[..needed]
        .chunks_exact(RATIONAL_SIZE)
        .map(|chunk| GpsRational {
            numerator: u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
            denominator: u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
        })
        .collect();
    Ok(rationals)
}

/// Degrees, minutes and seconds of one axis, each value followed by a space.
/// No D/M/S merge and no hemisphere sign: `40/1 20/1 0/1` gives `"40 20 0 "`.
pub fn dms_string(data: &[u8]) -> Result<String> {
    let mut location = String::new();
    for rational in parse_rationals(data, DMS_COMPONENTS)? {
        location.push_str(&format!("{} ", rational.to_f64()?));
    }
    Ok(location)
}

fn axis(tree: &MetadataTree, tag: u16) -> Result<String> {
    let gps = tree.require_ifd(GPS_IFD)?;
    let entry = gps.find_tag(tag).ok_or_else(|| ExifGpsError::TagNotFound {
        ifd: GPS_IFD.to_string(),
        tag,
    })?;
    debug!("GPS tag 0x{:04x}: {:?}, {} bytes", tag, entry.kind, entry.bytes.len());
    dms_string(&entry.bytes)
}

/// Pulls latitude and longitude out of the GPS IFD. Both must be present.
pub fn get_gps_coords(tree: &MetadataTree) -> Result<GpsCoordinates> {
    let latitude = axis(tree, TAG_GPS_LATITUDE)?;
    let longitude = axis(tree, TAG_GPS_LONGITUDE)?;
    Ok(GpsCoordinates { latitude, longitude })
}
