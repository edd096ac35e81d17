//! # PNG Encoding
//!
//! Turns an [`ImageMatrix`] into a complete PNG byte stream:
//!
//! ```text
//! signature (8) ‖ IHDR (25) ‖ IDAT (12 + n) ‖ IEND (12)
//! ```
//!
//! ## Modules
//!
//! - [`chunk`]: chunk framing and the IHDR/IDAT/IEND builders
//! - [`compress`]: zlib backends for the IDAT payload
//!
//! ## Usage Example
//!
//! ```
//! use ruler::png::{PngImage, SIGNATURE};
//! use ruler::png::compress::Zlib;
//! use ruler::render::Ruler;
//!
//! let ruler = Ruler::new(24.0, "#444", "1000".parse().unwrap());
//! let png = PngImage::encode(&ruler.to_matrix().unwrap(), &Zlib::default()).unwrap();
//!
//! assert_eq!(&png.as_bytes()[..8], &SIGNATURE);
//! assert!(png.to_data_uri().starts_with("data:image/png;base64,iVBORw0KGgo"));
//! ```

pub mod chunk;
pub mod compress;

use std::path::Path;

use crate::error::Result;
use crate::output;
use crate::render::ImageMatrix;

use self::chunk::{BIT_DEPTH, COLOR_TYPE_RGBA, IEND, build_idat, build_ihdr};
use self::compress::Compressor;

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Concatenate the signature and three framed chunks.
pub fn assemble(ihdr: &[u8], idat: &[u8], iend: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(SIGNATURE.len() + ihdr.len() + idat.len() + iend.len());
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(ihdr);
    out.extend_from_slice(idat);
    out.extend_from_slice(iend);
    out
}

/// One encoded image. Built fresh per request and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngImage {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PngImage {
    /// Compress `matrix` and frame it as an 8-bit RGBA PNG.
    pub fn encode(matrix: &ImageMatrix, compressor: &dyn Compressor) -> Result<Self> {
        let ihdr = build_ihdr(matrix.width(), matrix.height(), BIT_DEPTH, COLOR_TYPE_RGBA);
        let compressed = compressor.compress(matrix.as_bytes())?;
        let idat = build_idat(&compressed)?;
        let bytes = assemble(&ihdr, &idat, &IEND);

        log::debug!(
            "encoded {}x{} png: {} raw bytes -> {} idat bytes ({}) -> {} total",
            matrix.width(),
            matrix.height(),
            matrix.as_bytes().len(),
            compressed.len(),
            compressor.name(),
            bytes.len()
        );

        Ok(Self {
            width: matrix.width(),
            height: matrix.height(),
            bytes,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn to_base64(&self) -> String {
        output::to_base64(&self.bytes)
    }

    pub fn to_data_uri(&self) -> String {
        output::to_data_uri(&self.bytes)
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        output::write_file(path, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::compress::{Stored, Zlib};
    use crate::render::Ruler;

    fn ruler() -> Ruler {
        Ruler::new(24.0, "#444", "1000".parse().unwrap())
    }

    #[test]
    fn test_assemble_order() {
        let out = assemble(b"HH", b"DD", b"EE");
        assert_eq!(&out[..8], &SIGNATURE);
        assert_eq!(&out[8..], b"HHDDEE");
    }

    #[test]
    fn test_structure() {
        let png = ruler().to_png(&Zlib::default()).unwrap();
        let bytes = png.as_bytes();
        assert_eq!(&bytes[..8], &SIGNATURE);
        assert_eq!(&bytes[12..16], b"IHDR");
        assert_eq!(&bytes[37..41], b"IDAT");
        assert_eq!(&bytes[bytes.len() - 12..], &IEND);
        assert_eq!((png.width(), png.height()), (4, 24));
    }

    #[test]
    fn test_deterministic() {
        let a = ruler().to_png(&Zlib::default()).unwrap();
        let b = ruler().to_png(&Zlib::default()).unwrap();
        assert_eq!(a, b);
        let c = ruler().to_png(&Stored).unwrap();
        let d = ruler().to_png(&Stored).unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn test_stored_size() {
        let png = ruler().to_png(&Stored).unwrap();
        let raw = 24 * (1 + 4 * 4);
        assert_eq!(png.as_bytes().len(), 8 + 25 + 12 + (2 + 5 + raw + 4) + 12);
    }
}
