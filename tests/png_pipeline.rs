//! # Pipeline Tests
//!
//! End-to-end checks on encoded rulers: container layout, checksums,
//! decodability with an independent PNG decoder, and IDAT contents.

use std::io::Read;

use flate2::read::ZlibDecoder;
use pretty_assertions::assert_eq;
use ruler::checksum::crc32;
use ruler::png::compress::{Compressor, Stored, Zlib};
use ruler::png::{PngImage, SIGNATURE};
use ruler::{Color, Ruler};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

#[derive(Debug)]
struct RawChunk {
    kind: [u8; 4],
    data: Vec<u8>,
    crc: u32,
}

fn be32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(bytes[..4].try_into().unwrap())
}

/// Split a PNG byte stream into its chunks.
fn split_chunks(png: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&png[..8], &SIGNATURE);
    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let len = be32(&png[pos..]) as usize;
        let kind: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
        let data = png[pos + 8..pos + 8 + len].to_vec();
        let crc = be32(&png[pos + 8 + len..]);
        chunks.push(RawChunk { kind, data, crc });
        pos += 12 + len;
    }
    assert_eq!(pos, png.len());
    chunks
}

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

fn rhythm_ruler(thickness: f64) -> Ruler {
    Ruler::new(24.0, "#444", "1,0,0,0".parse().unwrap()).thickness(thickness)
}

fn compressors() -> Vec<Box<dyn Compressor>> {
    vec![Box::new(Zlib::default()), Box::new(Stored)]
}

// ============================================================================
// CONTAINER
// ============================================================================

#[test]
fn chunk_order_and_crcs() {
    for compressor in compressors() {
        let png = rhythm_ruler(1.0).to_png(compressor.as_ref()).unwrap();
        let chunks = split_chunks(png.as_bytes());

        let kinds: Vec<&[u8]> = chunks.iter().map(|c| &c.kind[..]).collect();
        assert_eq!(kinds, vec![&b"IHDR"[..], &b"IDAT"[..], &b"IEND"[..]]);

        for chunk in &chunks {
            let mut covered = chunk.kind.to_vec();
            covered.extend_from_slice(&chunk.data);
            assert_eq!(chunk.crc, crc32(&covered), "{:?}", chunk.kind);
        }
        assert_eq!(chunks[2].crc, 0xAE42_6082);
        assert!(chunks[2].data.is_empty());
    }
}

#[test]
fn ihdr_fields() {
    let png = rhythm_ruler(1.0).to_png(&Zlib::default()).unwrap();
    let ihdr = &split_chunks(png.as_bytes())[0];
    assert_eq!(ihdr.data.len(), 13);
    assert_eq!(be32(&ihdr.data[0..]), 4);
    assert_eq!(be32(&ihdr.data[4..]), 24);
    assert_eq!(&ihdr.data[8..], &[8, 6, 0, 0, 0]);
}

#[test]
fn dimensions_follow_scale() {
    for (n, scale, height) in [(4usize, 1.0, 24.0), (3, 2.0, 20.0), (5, 1.5, 21.0), (7, 0.5, 33.0)] {
        let pattern = "1".repeat(n).parse().unwrap();
        let png = Ruler::new(height, "#000", pattern)
            .scale(scale)
            .to_png(&Zlib::default())
            .unwrap();
        assert_eq!(png.width(), (n as f64 * scale).round() as u32);
        assert_eq!(png.height(), (height * scale).round() as u32);
    }
}

// ============================================================================
// CONTENTS
// ============================================================================

#[test]
fn idat_inflates_to_matrix() {
    for compressor in compressors() {
        let ruler = rhythm_ruler(3.0).scale(2.0);
        let matrix = ruler.to_matrix().unwrap();
        let png = PngImage::encode(&matrix, compressor.as_ref()).unwrap();

        let idat = &split_chunks(png.as_bytes())[1];
        assert_eq!(inflate(&idat.data), matrix.as_bytes());
    }
}

#[test]
fn decodes_with_image_crate() {
    let png = rhythm_ruler(2.0).to_png(&Zlib::default()).unwrap();
    let img = image::load_from_memory_with_format(png.as_bytes(), image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();

    assert_eq!(img.dimensions(), (4, 24));
    let gray = image::Rgba([0x44, 0x44, 0x44, 255]);
    let clear = image::Rgba([0, 0, 0, 0]);

    for y in 0..24 {
        let edge = y == 0 || y == 23;
        assert_eq!(*img.get_pixel(0, y), if edge { gray } else { clear }, "row {}", y);
        for x in 1..4 {
            assert_eq!(*img.get_pixel(x, y), clear, "({}, {})", x, y);
        }
    }
}

#[test]
fn single_pixel_line_sits_on_last_row() {
    let matrix = rhythm_ruler(1.0).to_matrix().unwrap();
    let gray = Color::rgba(0x44, 0x44, 0x44, 255);
    assert_eq!(matrix.pixel(0, 23), gray);
    for y in 0..23 {
        for x in 0..4 {
            assert_eq!(matrix.pixel(x, y), Color::TRANSPARENT);
        }
    }
}

#[test]
fn translucent_color_survives() {
    let ruler = Ruler::new(8.0, "rgba(10,20,30,0.5)", "1".parse().unwrap());
    let png = ruler.to_png(&Stored).unwrap();
    let img = image::load_from_memory(png.as_bytes()).unwrap().to_rgba8();
    assert_eq!(*img.get_pixel(0, 7), image::Rgba([10, 20, 30, 128]));
}

// ============================================================================
// DETERMINISM & OUTPUT
// ============================================================================

#[test]
fn repeated_runs_are_identical() {
    let a = rhythm_ruler(1.0).scale(2.0).to_png(&Zlib::default()).unwrap();
    let b = rhythm_ruler(1.0).scale(2.0).to_png(&Zlib::default()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_eq!(a.to_base64(), b.to_base64());
}

#[test]
fn data_uri_prefix() {
    let png = rhythm_ruler(1.0).to_png(&Zlib::default()).unwrap();
    let uri = png.to_data_uri();
    assert_eq!(uri, format!("data:image/png;base64,{}", png.to_base64()));
    assert!(png.to_base64().starts_with("iVBORw0KGgo"));
}

#[test]
fn write_file_round_trip() {
    let png = rhythm_ruler(1.0).to_png(&Zlib::default()).unwrap();
    let path = std::env::temp_dir().join(format!("ruler-pipeline-{}.png", std::process::id()));
    png.write_file(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), png.as_bytes());
    std::fs::remove_file(&path).unwrap();
}
