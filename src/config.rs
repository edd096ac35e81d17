//! # Batch Configuration
//!
//! JSON description of a set of rulers to render in one run.
//!
//! ```json
//! {
//!   "compression": "zlib",
//!   "level": 9,
//!   "rulers": [
//!     { "name": "body", "height": 24, "color": "#444", "pattern": [1, 0, 0, 0] },
//!     { "name": "body@2x", "height": 24, "color": "rgba(0,0,0,0.3)",
//!       "pattern": "1000", "thickness": 1, "scale": 2, "output": "body-2x.png" }
//!   ]
//! }
//! ```
//!
//! Every top-level field is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RulerError};
use crate::png::compress::{Compressor, Stored, Zlib};
use crate::render::{Pattern, Ruler};

/// IDAT backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionKind {
    #[default]
    Zlib,
    Stored,
}

/// A pattern written either as `[1, 0, 0, 0]` or `"1000"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Bits(Vec<u8>),
    Text(String),
}

impl PatternSpec {
    pub fn to_pattern(&self) -> Result<Pattern> {
        match self {
            Self::Bits(bits) => Pattern::from_bits(bits),
            Self::Text(s) => s.parse(),
        }
    }
}

fn default_thickness() -> f64 {
    1.0
}

fn default_scale() -> f64 {
    1.0
}

fn default_level() -> u32 {
    6
}

/// One ruler to render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RulerEntry {
    pub name: String,
    pub height: f64,
    pub color: String,
    pub pattern: PatternSpec,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Output file name; defaults to `<name>.png`.
    #[serde(default)]
    pub output: Option<String>,
}

impl RulerEntry {
    pub fn to_ruler(&self) -> Result<Ruler> {
        Ok(Ruler::new(self.height, &self.color, self.pattern.to_pattern()?)
            .thickness(self.thickness)
            .scale(self.scale))
    }

    pub fn output_name(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.png", self.name))
    }
}

/// Top-level config document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RulerConfig {
    #[serde(default)]
    pub compression: CompressionKind,
    /// zlib level 0-9, ignored for stored output. Default: 6
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub rulers: Vec<RulerEntry>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            compression: CompressionKind::default(),
            level: default_level(),
            rulers: Vec::new(),
        }
    }
}

impl RulerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            RulerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn compressor(&self) -> Result<Box<dyn Compressor>> {
        match self.compression {
            CompressionKind::Zlib => Ok(Box::new(Zlib::new(self.level)?)),
            CompressionKind::Stored => Ok(Box::new(Stored)),
        }
    }
}
