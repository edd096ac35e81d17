//! # Rendering Module
//!
//! Builds the uncompressed scanline matrix for a ruler image.
//!
//! ## Modules
//!
//! - [`ruler`]: Ruler parameters and the repeating on/off [`Pattern`]
//! - [`matrix`]: Scanline matrix construction ([`build_ruler_matrix`])
//!
//! ## Usage Example
//!
//! ```
//! use ruler::render::{Pattern, Ruler};
//!
//! let pattern: Pattern = "1000".parse().unwrap();
//! let ruler = Ruler::new(24.0, "#444", pattern).thickness(2.0);
//!
//! let matrix = ruler.to_matrix().unwrap();
//! assert_eq!((matrix.width(), matrix.height()), (4, 24));
//! assert_eq!(matrix.as_bytes().len(), 24 * (1 + 4 * 4));
//! ```

pub mod matrix;
pub mod ruler;

pub use matrix::{FILTER_NONE, ImageMatrix, build_ruler_matrix};
pub use ruler::{Pattern, Ruler};
