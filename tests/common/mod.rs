//! Fixture builders: minimal TIFF/EXIF payloads wrapped in JPEG or PNG containers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const ASCII: u16 = 2;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;

pub type Dms = [(u32, u32); 3];

pub const LAT_40_20_0: Dms = [(40, 1), (20, 1), (0, 1)];
pub const LON_73_59_0: Dms = [(73, 1), (59, 1), (0, 1)];
pub const LAT_51_30_26: Dms = [(51, 1), (30, 1), (2625, 100)];
pub const LON_0_7_39: Dms = [(0, 1), (7, 1), (39, 1)];

#[derive(Clone, Copy)]
pub enum Order {
    Big,
    Little,
}

impl Order {
    fn u16(self, v: u16) -> [u8; 2] {
        match self {
            Order::Big => v.to_be_bytes(),
            Order::Little => v.to_le_bytes(),
        }
    }

    fn u32(self, v: u32) -> [u8; 4] {
        match self {
            Order::Big => v.to_be_bytes(),
            Order::Little => v.to_le_bytes(),
        }
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn ascii(tag: u16, text: &str) -> Entry {
    let mut data = text.as_bytes().to_vec();
    data.push(0);
    Entry { tag, kind: ASCII, count: data.len() as u32, data }
}

fn rationals(order: Order, tag: u16, dms: Dms) -> Entry {
    let mut data = Vec::new();
    for (num, denom) in dms {
        data.extend_from_slice(&order.u32(num));
        data.extend_from_slice(&order.u32(denom));
    }
    Entry { tag, kind: RATIONAL, count: 3, data }
}

fn ifd_len(entries: &[Entry]) -> usize {
    let out_of_line: usize = entries
        .iter()
        .filter(|e| e.data.len() > 4)
        .map(|e| e.data.len() + e.data.len() % 2)
        .sum();
    2 + 12 * entries.len() + 4 + out_of_line
}

fn write_ifd(order: Order, entries: &[Entry], start: usize) -> Vec<u8> {
    let table_end = start + 2 + 12 * entries.len() + 4;
    let mut out = order.u16(entries.len() as u16).to_vec();
    let mut data_area = Vec::new();

    for e in entries {
        out.extend_from_slice(&order.u16(e.tag));
        out.extend_from_slice(&order.u16(e.kind));
        out.extend_from_slice(&order.u32(e.count));
        if e.data.len() <= 4 {
            let mut inline = e.data.clone();
            inline.resize(4, 0);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&order.u32((table_end + data_area.len()) as u32));
            data_area.extend_from_slice(&e.data);
            if e.data.len() % 2 == 1 {
                data_area.push(0);
            }
        }
    }

    out.extend_from_slice(&order.u32(0));
    out.extend_from_slice(&data_area);
    out
}

/// TIFF payload with IFD0 (`Make`) and optionally a GPS IFD holding `gps`
fn build_tiff(order: Order, gps: Option<Vec<Entry>>) -> Vec<u8> {
    let mut ifd0 = vec![ascii(0x010F, "Acme Camera")];
    if gps.is_some() {
        ifd0.push(Entry { tag: 0x8825, kind: LONG, count: 1, data: vec![0; 4] });
    }

    let gps_start = 8 + ifd_len(&ifd0);
    if let Some(pointer) = ifd0.iter_mut().find(|e| e.tag == 0x8825) {
        pointer.data = order.u32(gps_start as u32).to_vec();
    }

    let mut out = match order {
        Order::Big => b"MM".to_vec(),
        Order::Little => b"II".to_vec(),
    };
    out.extend_from_slice(&order.u16(42));
    out.extend_from_slice(&order.u32(8));
    out.extend_from_slice(&write_ifd(order, &ifd0, 8));
    if let Some(gps) = gps {
        out.extend_from_slice(&write_ifd(order, &gps, gps_start));
    }
    out
}

/// GPS IFD with reference tags and whichever coordinates are given
pub fn gps_tiff(order: Order, lat: Option<Dms>, lon: Option<Dms>) -> Vec<u8> {
    let mut gps = vec![ascii(0x0001, "N")];
    if let Some(lat) = lat {
        gps.push(rationals(order, 0x0002, lat));
    }
    gps.push(ascii(0x0003, "W"));
    if let Some(lon) = lon {
        gps.push(rationals(order, 0x0004, lon));
    }
    build_tiff(order, Some(gps))
}

pub fn tiff_without_gps() -> Vec<u8> {
    build_tiff(Order::Big, None)
}

pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];

    // APP0 JFIF
    let jfif = [b'J', b'F', b'I', b'F', 0, 1, 1, 0, 0, 1, 0, 1, 0, 0];
    out.extend_from_slice(&[0xFF, 0xE0]);
    out.extend_from_slice(&((jfif.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(&jfif);

    // APP1 Exif
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&((tiff.len() + 6 + 2) as u16).to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);

    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

// CRCs are left zero, nothing on the read path checks them
fn png_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&[0, 0, 0, 0]);
}

pub fn png_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    png_chunk(&mut out, b"IHDR", &ihdr);
    png_chunk(&mut out, b"eXIf", tiff);
    png_chunk(&mut out, b"IEND", &[]);
    out
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}

/// JPEG with a complete GPS position (40 20 0 / 73 59 0)
pub fn write_gps_jpeg(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &jpeg_with_exif(&gps_tiff(Order::Big, Some(LAT_40_20_0), Some(LON_73_59_0))))
}

/// PNG with a complete GPS position (51 30 26.25 / 0 7 39)
pub fn write_gps_png(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &png_with_exif(&gps_tiff(Order::Big, Some(LAT_51_30_26), Some(LON_0_7_39))))
}
