//! # CRC-32
//!
//! Table-driven CRC-32 as used by PNG, zlib and gzip.
//!
//! ## Algorithm
//!
//! ```text
//! crc = seed                       (0xFFFFFFFF by default)
//! for each byte b:
//!     crc = TABLE[(crc ^ b) & 0xFF] ^ (crc >> 8)
//! return crc ^ 0xFFFFFFFF
//! ```
//!
//! The 256-entry table is computed at compile time, so every encoder in the
//! process reads the same immutable array without synchronization.
//!
//! ## Check Values
//!
//! | Input | CRC-32 |
//! |-------|--------|
//! | `"123456789"` | `0xCBF43926` |
//! | `"IEND"` | `0xAE426082` |

/// Reversed CRC-32 polynomial.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Lookup table: `CRC_TABLE[n]` is the CRC register after shifting byte `n`
/// through eight rounds of the polynomial.
pub const CRC_TABLE: [u32; 256] = make_table();

const fn make_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLYNOMIAL ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Streaming CRC-32 hasher.
///
/// ```
/// use ruler::checksum::Crc32;
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"IE");
/// hasher.update(b"ND");
/// assert_eq!(hasher.finalize(), 0xAE42_6082);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self::with_seed(0xFFFF_FFFF)
    }

    /// Start from an explicit register value instead of all ones.
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        let mut crc = self.state;
        for &b in bytes {
            crc = CRC_TABLE[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
        }
        self.state = crc;
    }

    /// Final checksum. The hasher can keep absorbing bytes afterwards.
    pub fn finalize(&self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

/// CRC-32 of `bytes` with the standard all-ones seed.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32_with_seed(bytes, 0xFFFF_FFFF)
}

/// CRC-32 of `bytes` starting from register value `seed`.
pub fn crc32_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut hasher = Crc32::with_seed(seed);
    hasher.update(bytes);
    hasher.finalize()
}
