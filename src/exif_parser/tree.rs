use std::collections::BTreeMap;

use exif::{Context, Exif, In, Tag, Value};

use crate::constants::{EXIF_IFD, GPS_IFD, INTEROP_IFD, ROOT_IFD, THUMBNAIL_IFD};
use crate::error::{ExifGpsError, Result};

/// EXIF value type of a tag entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Byte,
    Ascii,
    Short,
    Long,
    Rational,
    SByte,
    Undefined,
    SShort,
    SLong,
    SRational,
    Float,
    Double,
    Unknown,
}

/// One tag of an IFD. `bytes` is the value payload encoded big-endian.
#[derive(Debug, Clone)]
pub struct TagEntry {
    pub id: u16,
    pub kind: ValueKind,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct Ifd {
    entries: Vec<TagEntry>,
}

impl Ifd {
    pub fn find_tag(&self, id: u16) -> Option<&TagEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: TagEntry) {
        self.entries.push(entry);
    }
}

/// Tag groups of one image, keyed by IFD path (`IFD`, `IFD/GPSInfo`, ...)
#[derive(Debug, Clone, Default)]
pub struct MetadataTree {
    ifds: BTreeMap<&'static str, Ifd>,
}

impl MetadataTree {
    /// Rebuilds the IFD layout from the fields kamadak-exif decoded.
    /// IFD pointer tags are consumed by the reader, so an IFD only shows up
    /// here when it holds at least one tag.
    pub fn from_exif(exif: &Exif) -> Self {
        let mut tree = MetadataTree::default();

        for field in exif.fields() {
            let Some(ifd_path) = ifd_path_of(field.tag, field.ifd_num) else {
                continue;
            };

            let (kind, bytes) = encode_value(&field.value);
            tree.ifds.entry(ifd_path).or_default().push(TagEntry {
                id: field.tag.number(),
                kind,
                bytes,
            });
        }

        tree
    }

    pub fn ifd(&self, path: &str) -> Option<&Ifd> {
        self.ifds.get(path)
    }

    /// Like [`MetadataTree::ifd`] but a missing IFD is an error
    pub fn require_ifd(&self, path: &str) -> Result<&Ifd> {
        self.ifd(path).ok_or_else(|| ExifGpsError::IfdNotFound {
            ifd: path.to_string(),
        })
    }

    pub fn ifd_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ifds.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ifds.is_empty()
    }
}

fn ifd_path_of(tag: Tag, ifd_num: In) -> Option<&'static str> {
    match tag.context() {
        Context::Tiff if ifd_num == In::PRIMARY => Some(ROOT_IFD),
        Context::Tiff if ifd_num == In::THUMBNAIL => Some(THUMBNAIL_IFD),
        Context::Exif => Some(EXIF_IFD),
        Context::Interop => Some(INTEROP_IFD),
        Context::Gps => Some(GPS_IFD),
        _ => None,
    }
}

/// Encodes a decoded value back into its big-endian wire payload
pub fn encode_value(value: &Value) -> (ValueKind, Vec<u8>) {
    match value {
        Value::Byte(v) => (ValueKind::Byte, v.clone()),
        Value::Ascii(strings) => {
            let mut bytes = Vec::new();
            for s in strings {
                bytes.extend_from_slice(s);
                bytes.push(0);
            }
            (ValueKind::Ascii, bytes)
        }
        Value::Short(v) => (ValueKind::Short, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::Long(v) => (ValueKind::Long, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::Rational(v) => {
            let bytes = v
                .iter()
                .flat_map(|r| r.num.to_be_bytes().into_iter().chain(r.denom.to_be_bytes()))
                .collect();
            (ValueKind::Rational, bytes)
        }
        Value::SByte(v) => (ValueKind::SByte, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::Undefined(v, _) => (ValueKind::Undefined, v.clone()),
        Value::SShort(v) => (ValueKind::SShort, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::SLong(v) => (ValueKind::SLong, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::SRational(v) => {
            let bytes = v
                .iter()
                .flat_map(|r| r.num.to_be_bytes().into_iter().chain(r.denom.to_be_bytes()))
                .collect();
            (ValueKind::SRational, bytes)
        }
        Value::Float(v) => (ValueKind::Float, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        Value::Double(v) => (ValueKind::Double, v.iter().flat_map(|x| x.to_be_bytes()).collect()),
        _ => (ValueKind::Unknown, Vec::new()),
    }
}
