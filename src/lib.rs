//! # Ruler - Vertical Rhythm Background Images
//!
//! Ruler generates small striped PNG images used as CSS background images to
//! visualise a baseline grid. Output is deterministic: the same parameters
//! always produce byte-identical PNGs.
//!
//! ## Quick Start
//!
//! ```
//! use ruler::{png::compress::Zlib, render::Ruler};
//!
//! // 24px line height, one dark pixel every four columns
//! let ruler = Ruler::new(24.0, "#444", "1000".parse()?);
//!
//! let png = ruler.to_png(&Zlib::default())?;
//! let css = format!("background-image: url({});", png.to_data_uri());
//! assert!(css.contains("data:image/png;base64,"));
//!
//! # Ok::<(), ruler::RulerError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! color ─┐
//!        ├─► render::build_ruler_matrix ─► Compressor ─► png::chunk ─► PngImage
//! pattern┘                                                              │
//!                                                    base64 / data URI / file
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | CSS color expression parsing |
//! | [`checksum`] | CRC-32 and Adler-32 |
//! | [`render`] | Ruler parameters and scanline matrix |
//! | [`png`] | Compression, chunk framing, assembly |
//! | [`output`] | Base64, data URI and file output |
//! | [`config`] | JSON batch configuration |
//! | [`batch`] | Parallel rendering of a config |
//! | [`error`] | Error types |

pub mod batch;
pub mod checksum;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod png;
pub mod render;

// Re-exports for convenience
pub use color::{Color, parse_color};
pub use config::RulerConfig;
pub use error::RulerError;
pub use png::PngImage;
pub use render::{ImageMatrix, Pattern, Ruler};
