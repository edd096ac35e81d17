//! # Ruler Parameters
//!
//! A ruler is a horizontal stripe drawn at the top and bottom edges of a
//! repeating background tile. Stacking tiles vertically joins the bottom band
//! of one tile with the top band of the next into a single line.
//!
//! ```text
//!  pattern = 1 0 0 0          thickness = 3
//!
//!  row 0      █ . . .   ← top band: floor(3 / 2) = 1 row
//!  row 1      . . . .
//!  ...
//!  row h-2    █ . . .   ← bottom band: 1 + (3 mod 2) = 2 rows
//!  row h-1    █ . . .
//! ```

use std::fmt;
use std::str::FromStr;

use crate::color::{self, Color};
use crate::error::{Result, RulerError};
use crate::png::PngImage;
use crate::png::compress::Compressor;

use super::matrix::{self, ImageMatrix};

/// Repeating on/off cells, one per pixel column of the unscaled tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern(Vec<bool>);

impl Pattern {
    /// Build a pattern from cells. Fails on an empty pattern.
    pub fn new(cells: Vec<bool>) -> Result<Self> {
        if cells.is_empty() {
            return Err(RulerError::InvalidPattern("pattern is empty".to_string()));
        }
        Ok(Self(cells))
    }

    /// Build a pattern from 0/1 numbers.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let cells = bits
            .iter()
            .map(|&b| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(RulerError::InvalidPattern(format!(
                    "cell must be 0 or 1, got {}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(cells)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether cell `index` (wrapping) is set.
    pub fn is_set(&self, index: usize) -> bool {
        self.0[index % self.0.len()]
    }

    pub fn cells(&self) -> &[bool] {
        &self.0
    }
}

/// Accepts `"1000"`, `"1,0,0,0"` and `"1 0 0 0"`.
impl FromStr for Pattern {
    type Err = RulerError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(RulerError::InvalidPattern(format!(
                    "unexpected character '{}' in '{}'",
                    other, s
                ))),
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_bits(&bits)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.0 {
            f.write_str(if cell { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Parameters for one ruler image.
///
/// `height` and `thickness` are in unscaled pixels; `scale` multiplies both
/// dimensions (e.g. 2.0 for high-density displays).
#[derive(Debug, Clone)]
pub struct Ruler {
    /// Tile height in pixels.
    pub height: f64,
    /// Stripe color.
    pub color: Color,
    /// Repeating column pattern.
    pub pattern: Pattern,
    /// Stripe thickness in pixels. Default: 1.0
    pub thickness: f64,
    /// Output scale factor. Default: 1.0
    pub scale: f64,
}

impl Ruler {
    pub fn new(height: f64, color: &str, pattern: Pattern) -> Self {
        Self {
            height,
            color: color::parse_color(color),
            pattern,
            thickness: 1.0,
            scale: 1.0,
        }
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn to_matrix(&self) -> Result<ImageMatrix> {
        matrix::build_ruler_matrix(
            self.height,
            self.color,
            &self.pattern,
            self.thickness,
            self.scale,
        )
    }

    /// Run the whole pipeline: matrix, compression, chunk framing.
    pub fn to_png(&self, compressor: &dyn Compressor) -> Result<PngImage> {
        PngImage::encode(&self.to_matrix()?, compressor)
    }
}

impl fmt::Display for Ruler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "height={} color={} pattern={} thickness={} scale={}",
            self.height, self.color, self.pattern, self.thickness, self.scale
        )
    }
}
