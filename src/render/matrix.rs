//! # Scanline Matrix
//!
//! The raw (pre-compression) PNG image data for a truecolor + alpha image:
//!
//! ```text
//! ┌────────┬──────────┬──────────┬─────┬──────────┐
//! │ filter │ pixel 0  │ pixel 1  │ ... │ pixel w-1│   scanline 0
//! │  (0)   │ R G B A  │ R G B A  │     │ R G B A  │
//! ├────────┼──────────┼──────────┼─────┼──────────┤
//! │  ...   │                                      │   scanline 1..h-1
//! └────────┴──────────────────────────────────────┘
//!
//! len = height * (1 + width * 4)
//! ```
//!
//! Every scanline uses filter type 0 ("None").

use crate::color::Color;
use crate::error::{Result, RulerError};

use super::ruler::Pattern;

/// PNG filter type "None".
pub const FILTER_NONE: u8 = 0;

/// Largest width or height IHDR may declare (2^31 - 1).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Uncompressed scanlines, each prefixed with its filter byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMatrix {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageMatrix {
    /// Fully transparent matrix with filter bytes in place.
    pub fn transparent(width: u32, height: u32) -> Self {
        let stride = 1 + width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            data: vec![0; stride * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per scanline, filter byte included.
    pub fn stride(&self) -> usize {
        1 + self.width as usize * BYTES_PER_PIXEL
    }

    /// Scanline `y` including its leading filter byte.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Pixel at column `x` of scanline `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()` or `y >= self.height()`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width, "column {} out of range (width {})", x, self.width);
        let row = self.row(y);
        let i = 1 + x as usize * BYTES_PER_PIXEL;
        Color::rgba(row[i], row[i + 1], row[i + 2], row[i + 3])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Build the ruler matrix.
///
/// ## Geometry
///
/// ```text
/// width        = round(pattern.len * scale)
/// height'      = round(height * scale)
/// thickness'   = thickness * scale
/// band         = floor(thickness' / 2)
/// bottom_start = height' - band - (thickness' mod 2)
/// ```
///
/// Scanline `i` carries the pattern when `i < band` or `i >= bottom_start`;
/// every other scanline is transparent. Inside a pattern line, column `j`
/// takes `color` when `pattern[floor(j / scale) mod len]` is set.
///
/// A thickness larger than the image covers every scanline.
///
/// ## Errors
///
/// [`RulerError::InvalidGeometry`] when `scale` is not a positive finite
/// number, `height` or `thickness` is negative or not finite, or either
/// rounded dimension is zero or exceeds [`MAX_DIMENSION`].
pub fn build_ruler_matrix(
    height: f64,
    color: Color,
    pattern: &Pattern,
    thickness: f64,
    scale: f64,
) -> Result<ImageMatrix> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(RulerError::InvalidGeometry(format!(
            "scale must be a positive number, got {}",
            scale
        )));
    }
    if !(height.is_finite() && height >= 0.0) {
        return Err(RulerError::InvalidGeometry(format!(
            "height must be a non-negative number, got {}",
            height
        )));
    }
    if !(thickness.is_finite() && thickness >= 0.0) {
        return Err(RulerError::InvalidGeometry(format!(
            "thickness must be a non-negative number, got {}",
            thickness
        )));
    }
    if pattern.is_empty() {
        return Err(RulerError::InvalidPattern("pattern is empty".to_string()));
    }

    let width = dimension("width", pattern.len() as f64 * scale)?;
    let rows = dimension("height", height * scale)?;

    let thickness = thickness * scale;
    let band = (thickness / 2.0).floor();
    let remainder = thickness % 2.0;
    let bottom_start = rows as f64 - band - remainder;

    // One template line serves every pattern row.
    let mut pattern_line = Vec::with_capacity(1 + width as usize * BYTES_PER_PIXEL);
    pattern_line.push(FILTER_NONE);
    for j in 0..width {
        let index = (j as f64 / scale).floor() as usize;
        let px = if pattern.is_set(index) {
            color
        } else {
            Color::TRANSPARENT
        };
        pattern_line.extend_from_slice(&px.to_bytes());
    }

    let mut matrix = ImageMatrix::transparent(width, rows);
    let stride = matrix.stride();
    for (i, line) in matrix.data.chunks_exact_mut(stride).enumerate() {
        let i = i as f64;
        if i < band || i >= bottom_start {
            line.copy_from_slice(&pattern_line);
        }
    }

    log::debug!(
        "built ruler matrix {}x{} (band={}, bottom_start={})",
        width,
        rows,
        band,
        bottom_start
    );

    Ok(matrix)
}

fn dimension(name: &str, value: f64) -> Result<u32> {
    let rounded = value.round();
    if rounded < 1.0 || rounded > MAX_DIMENSION as f64 {
        return Err(RulerError::InvalidGeometry(format!(
            "{} rounds to {}, must be between 1 and {}",
            name, rounded, MAX_DIMENSION
        )));
    }
    Ok(rounded as u32)
}
