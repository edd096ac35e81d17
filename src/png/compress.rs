//! # IDAT Compression
//!
//! The IDAT payload is a zlib stream (RFC 1950) wrapping DEFLATE data.
//! Two backends implement [`Compressor`]:
//!
//! | Backend | Output | Notes |
//! |---------|--------|-------|
//! | [`Zlib`] | compressed | `flate2`, configurable level |
//! | [`Stored`] | uncompressed blocks | no DEFLATE coding, Adler-32 trailer computed here |
//!
//! Both are deterministic: the same input always produces the same bytes.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::checksum::adler32;
use crate::error::{Result, RulerError};

/// Turns raw scanlines into a zlib stream.
pub trait Compressor: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;
}

/// DEFLATE via `flate2`.
#[derive(Debug, Clone, Copy)]
pub struct Zlib {
    level: u32,
}

impl Default for Zlib {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl Zlib {
    /// Compression level 0 (none) to 9 (best).
    pub fn new(level: u32) -> Result<Self> {
        if level > 9 {
            return Err(RulerError::Config(format!(
                "compression level must be 0-9, got {}",
                level
            )));
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Compressor for Zlib {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(raw)
            .map_err(|e| RulerError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| RulerError::Compression(e.to_string()))
    }
}

/// zlib stream made of stored (uncompressed) DEFLATE blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stored;

/// Largest payload of a single stored block.
pub const MAX_STORED_BLOCK: usize = 65_535;

impl Compressor for Stored {
    fn name(&self) -> &'static str {
        "stored"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let blocks = raw.len().div_ceil(MAX_STORED_BLOCK).max(1);
        let mut out = Vec::with_capacity(2 + raw.len() + blocks * 5 + 4);

        // CMF: deflate, 32K window. FLG: no dict, level 0, check bits for
        // (CMF * 256 + FLG) % 31 == 0.
        out.push(0x78);
        out.push(0x01);

        let mut chunks = raw.chunks(MAX_STORED_BLOCK).peekable();
        if chunks.peek().is_none() {
            // Empty input still needs one final block.
            out.extend_from_slice(&[0x01, 0x00, 0x00, 0xFF, 0xFF]);
        }
        while let Some(block) = chunks.next() {
            let is_final = chunks.peek().is_none();
            out.push(u8::from(is_final)); // BFINAL, BTYPE = 00
            let len = block.len() as u16;
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(&(!len).to_le_bytes());
            out.extend_from_slice(block);
        }

        out.extend_from_slice(&adler32(raw).to_be_bytes());
        Ok(out)
    }
}
