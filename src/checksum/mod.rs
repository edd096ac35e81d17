//! # Checksums
//!
//! Checksum primitives used by the PNG container and the zlib stream wrapper.
//!
//! | Algorithm | Used by | Module |
//! |-----------|---------|--------|
//! | CRC-32 (reflected, poly `0xEDB88320`) | PNG chunk trailers | [`crc32`] |
//! | Adler-32 | zlib stream trailer ([`Stored`](crate::png::compress::Stored)) | [`adler32`] |
//!
//! Both come in two shapes: a one-shot function over a byte slice and a
//! streaming hasher with `update`/`finalize` for inputs split across buffers.

pub mod adler32;
pub mod crc32;

pub use adler32::{Adler32, adler32};
pub use crc32::{CRC_TABLE, Crc32, crc32, crc32_with_seed};
