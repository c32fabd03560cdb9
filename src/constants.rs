// Output files
pub const DEFAULT_CSV_OUTPUT: &str = "output.csv";
pub const DEFAULT_HTML_OUTPUT: &str = "output.html";

// Extensions are matched case-sensitively, including the leading dot
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

// Report columns
pub const REPORT_HEADER: [&str; 3] = ["Image File Path", "GPS Latitude", "GPS Longitude"];

// IFD paths inside the metadata tree
pub const ROOT_IFD: &str = "IFD";
pub const THUMBNAIL_IFD: &str = "IFD1";
pub const EXIF_IFD: &str = "IFD/Exif";
pub const INTEROP_IFD: &str = "IFD/Exif/Iop";
pub const GPS_IFD: &str = "IFD/GPSInfo";

// GPS tag identifiers (GPS IFD)
pub const TAG_GPS_LATITUDE: u16 = 0x0002;
pub const TAG_GPS_LONGITUDE: u16 = 0x0004;

// Degrees, minutes, seconds: 3 rationals of 8 bytes each
pub const DMS_COMPONENTS: usize = 3;
pub const RATIONAL_SIZE: usize = 8;
