//! # PNG Chunks
//!
//! Every chunk is framed the same way, all integers big-endian:
//!
//! ```text
//! ┌────────────┬────────────┬──────────────────┬────────────┐
//! │ length (4) │ type (4)   │ data (length)    │ crc (4)    │
//! └────────────┴────────────┴──────────────────┴────────────┘
//!                └──────── crc32(type ‖ data) ──┘
//! ```
//!
//! ## IHDR Layout (13 bytes)
//!
//! | Offset | Size | Field | Value |
//! |--------|------|-------|-------|
//! | 0 | 4 | width | pixels |
//! | 4 | 4 | height | pixels |
//! | 8 | 1 | bit depth | 8 |
//! | 9 | 1 | color type | 6 (truecolor + alpha) |
//! | 10 | 1 | compression | 0 |
//! | 11 | 1 | filter method | 0 |
//! | 12 | 1 | interlace | 0 |

use crate::checksum::Crc32;
use crate::error::{Result, RulerError};

/// Bit depth written to IHDR.
pub const BIT_DEPTH: u8 = 8;

/// Color type 6: truecolor with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Size of the IHDR payload.
pub const IHDR_LEN: usize = 13;

/// Largest payload a chunk length field may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// The complete IEND chunk: zero length, type, and `crc32("IEND")`.
pub const IEND: [u8; 12] = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

/// Length field for a payload of `len` bytes.
///
/// Fails with [`RulerError::Compression`] above [`MAX_CHUNK_LEN`].
pub fn checked_length(len: usize) -> Result<u32> {
    if len > MAX_CHUNK_LEN {
        return Err(RulerError::Compression(format!(
            "chunk payload of {} bytes exceeds the {} byte limit",
            len, MAX_CHUNK_LEN
        )));
    }
    Ok(len as u32)
}

/// A chunk before serialization. The payload never exceeds [`MAX_CHUNK_LEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    kind: [u8; 4],
    data: Vec<u8>,
    length: u32,
}

impl Chunk {
    pub fn new(kind: &[u8; 4], data: Vec<u8>) -> Result<Self> {
        let length = checked_length(data.len())?;
        Ok(Self {
            kind: *kind,
            data,
            length,
        })
    }

    pub fn kind(&self) -> &[u8; 4] {
        &self.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value of the length field (payload only).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// CRC-32 over type followed by data.
    pub fn crc(&self) -> u32 {
        let mut hasher = Crc32::new();
        hasher.update(&self.kind);
        hasher.update(&self.data);
        hasher.finalize()
    }

    /// Append the framed chunk to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.reserve(12 + self.data.len());
        out.extend_from_slice(&self.length().to_be_bytes());
        out.extend_from_slice(&self.kind);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.data.len());
        self.write_to(&mut out);
        out
    }
}

/// # Image Header
///
/// Packs `width`, `height`, `depth` and `color_type` with compression,
/// filter and interlace all zero.
///
/// ```
/// use ruler::png::chunk::{build_ihdr, BIT_DEPTH, COLOR_TYPE_RGBA};
///
/// let ihdr = build_ihdr(4, 24, BIT_DEPTH, COLOR_TYPE_RGBA);
/// assert_eq!(&ihdr[0..8], &[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
/// assert_eq!(ihdr.len(), 12 + 13);
/// ```
pub fn build_ihdr(width: u32, height: u32, depth: u8, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(IHDR_LEN);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(depth);
    data.push(color_type);
    data.push(0); // compression: deflate
    data.push(0); // filter method: adaptive
    data.push(0); // interlace: none
    let chunk = Chunk {
        kind: *b"IHDR",
        data,
        length: IHDR_LEN as u32,
    };
    chunk.to_bytes()
}

/// # Image Data
///
/// Frames an already-compressed zlib stream.
///
/// Fails when the stream is longer than [`MAX_CHUNK_LEN`].
pub fn build_idat(compressed: &[u8]) -> Result<Vec<u8>> {
    Ok(Chunk::new(b"IDAT", compressed.to_vec())?.to_bytes())
}

/// # Image Trailer
pub fn build_iend() -> Vec<u8> {
    IEND.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::crc32;

    fn be32(bytes: &[u8]) -> u32 {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn test_ihdr_layout() {
        let ihdr = build_ihdr(4, 24, BIT_DEPTH, COLOR_TYPE_RGBA);
        assert_eq!(be32(&ihdr[0..4]), 13);
        assert_eq!(&ihdr[4..8], b"IHDR");
        assert_eq!(be32(&ihdr[8..12]), 4);
        assert_eq!(be32(&ihdr[12..16]), 24);
        assert_eq!(&ihdr[16..21], &[8, 6, 0, 0, 0]);
        assert_eq!(be32(&ihdr[21..25]), crc32(&ihdr[4..21]));
    }

    #[test]
    fn test_ihdr_large_dimensions() {
        let ihdr = build_ihdr(0x0102_0304, 0xA0B0_C0D0, BIT_DEPTH, COLOR_TYPE_RGBA);
        assert_eq!(&ihdr[8..16], &[1, 2, 3, 4, 0xA0, 0xB0, 0xC0, 0xD0]);
    }

    #[test]
    fn test_idat_framing() {
        let payload = [0x78, 0x9C, 1, 2, 3];
        let idat = build_idat(&payload).unwrap();
        assert_eq!(idat.len(), 12 + payload.len());
        assert_eq!(be32(&idat[0..4]), payload.len() as u32);
        assert_eq!(&idat[4..8], b"IDAT");
        assert_eq!(&idat[8..13], &payload);
        assert_eq!(be32(&idat[13..17]), crc32(&idat[4..13]));
    }

    #[test]
    fn test_iend_matches_generic_chunk() {
        let iend = Chunk::new(b"IEND", Vec::new()).unwrap();
        assert_eq!(iend.length(), 0);
        assert_eq!(iend.kind(), b"IEND");
        assert_eq!(build_iend(), iend.to_bytes());
        assert_eq!(&IEND[8..], &[174, 66, 96, 130]);
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(checked_length(0).unwrap(), 0);
        assert_eq!(checked_length(MAX_CHUNK_LEN).unwrap(), 0x7FFF_FFFF);
        assert!(matches!(
            checked_length(MAX_CHUNK_LEN + 1),
            Err(RulerError::Compression(_))
        ));
    }

    #[test]
    fn test_chunk_accessors() {
        let chunk = Chunk::new(b"IDAT", vec![1, 2, 3]).unwrap();
        assert_eq!(chunk.length(), 3);
        assert_eq!(chunk.data(), &[1, 2, 3]);
        assert_eq!(chunk.crc(), crc32(b"IDAT\x01\x02\x03"));
    }
}
