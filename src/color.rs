//! # Color Parsing
//!
//! Best-effort parsing of CSS color expressions into RGBA bytes.
//!
//! ## Grammar
//!
//! Forms are tried in order:
//!
//! | Form | Example | Result |
//! |------|---------|--------|
//! | 6 hex digits | `#112233` | `(17, 34, 51, 255)` |
//! | 3 hex digits | `#fff` | `(255, 255, 255, 255)` |
//! | `rgb(...)` | `rgb(10, 20, 30)` | `(10, 20, 30, 255)` |
//! | `rgba(...)` | `rgba(10, 20, 30, 0.5)` | `(10, 20, 30, 128)` |
//!
//! Anything else parses as [`ColorExpr::Unrecognized`] and yields opaque
//! white. Parsing never fails.
//!
//! ## Channel Rules
//!
//! - Red, green and blue are decimal numbers, rounded and clamped to 0..=255.
//! - Alpha is a fraction in 0..=1, scaled with `round(alpha * 255)` and clamped.
//!   An explicit `0` is honored as fully transparent.
//! - A missing or non-numeric channel falls back to 255.

use std::fmt;
use std::str::FromStr;

/// An RGBA color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    /// Opaque white, the fallback for unparseable input.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Fully transparent black, written for unset pattern cells.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl FromStr for Color {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_color(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// A recognized color expression, before conversion to bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorExpr {
    /// `#RGB`, digits already widened to bytes (`f` -> `0xff`)
    Hex3([u8; 3]),
    /// `#RRGGBB`
    Hex6([u8; 3]),
    /// `rgb(r, g, b[, a])`, raw component text
    Rgb(Vec<String>),
    /// `rgba(r, g, b[, a])`, raw component text
    Rgba(Vec<String>),
    Unrecognized,
}

impl ColorExpr {
    /// Classify `input` into one of the supported forms.
    pub fn parse(input: &str) -> Self {
        let s = input.trim();

        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(digits).unwrap_or(Self::Unrecognized);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return Self::Rgba(split_args(args));
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return Self::Rgb(split_args(args));
        }

        Self::Unrecognized
    }

    /// Resolve the expression to concrete channel bytes.
    pub fn to_color(&self) -> Color {
        match self {
            Self::Hex3([r, g, b]) | Self::Hex6([r, g, b]) => Color::rgba(*r, *g, *b, 255),
            Self::Rgb(parts) | Self::Rgba(parts) => {
                let channel = |i: usize| {
                    parts
                        .get(i)
                        .and_then(|p| parse_number(p))
                        .map(clamp_byte)
                        .unwrap_or(255)
                };
                let alpha = parts
                    .get(3)
                    .and_then(|p| parse_number(p))
                    .map(|a| clamp_byte(a * 255.0))
                    .unwrap_or(255);
                Color::rgba(channel(0), channel(1), channel(2), alpha)
            }
            Self::Unrecognized => Color::WHITE,
        }
    }
}

/// Parse a color expression. Unrecognized input yields opaque white.
///
/// ```
/// use ruler::color::{parse_color, Color};
///
/// assert_eq!(parse_color("#112233"), Color::rgba(17, 34, 51, 255));
/// assert_eq!(parse_color("rgba(10,20,30,0.5)"), Color::rgba(10, 20, 30, 128));
/// assert_eq!(parse_color("papayawhip"), Color::WHITE);
/// ```
pub fn parse_color(input: &str) -> Color {
    ColorExpr::parse(input).to_color()
}

fn parse_hex(digits: &str) -> Option<ColorExpr> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
    match digits.len() {
        6 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(ColorExpr::Hex6([byte(0)?, byte(2)?, byte(4)?]))
        }
        3 => {
            let widen = |n: u8| n * 17;
            Some(ColorExpr::Hex3([
                widen(nibble(0)?),
                widen(nibble(1)?),
                widen(nibble(2)?),
            ]))
        }
        _ => None,
    }
}

/// Return the text between `name(` and the closing `)`.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args(args: &str) -> Vec<String> {
    args.split(',').map(|p| p.trim().to_string()).collect()
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn clamp_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
