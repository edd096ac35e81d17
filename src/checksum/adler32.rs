//! # Adler-32
//!
//! The checksum that trails every zlib stream (RFC 1950). Two running sums
//! modulo 65521 combined as `(s2 << 16) | s1`.

const MOD_ADLER: u32 = 65_521;

/// Largest number of bytes that can be summed before `s2` could overflow a
/// `u32` and a modulo reduction is required.
const NMAX: usize = 5552;

/// Streaming Adler-32 hasher.
#[derive(Debug, Clone, Copy)]
pub struct Adler32 {
    s1: u32,
    s2: u32,
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Adler32 {
    pub fn new() -> Self {
        Self { s1: 1, s2: 0 }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for block in bytes.chunks(NMAX) {
            for &b in block {
                self.s1 += b as u32;
                self.s2 += self.s1;
            }
            self.s1 %= MOD_ADLER;
            self.s2 %= MOD_ADLER;
        }
    }

    pub fn finalize(&self) -> u32 {
        (self.s2 << 16) | self.s1
    }
}

/// Adler-32 of `bytes`.
pub fn adler32(bytes: &[u8]) -> u32 {
    let mut hasher = Adler32::new();
    hasher.update(bytes);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(adler32(&[]), 1);
    }

    #[test]
    fn test_wikipedia() {
        assert_eq!(adler32(b"Wikipedia"), 0x11E6_0398);
    }

    #[test]
    fn test_long_input_reduces() {
        // 0xFF * 100_000 would overflow s2 without periodic reduction.
        let data = vec![0xFFu8; 100_000];
        let mut a: u32 = 1;
        let mut b: u32 = 0;
        for &byte in &data {
            a = (a + byte as u32) % MOD_ADLER;
            b = (b + a) % MOD_ADLER;
        }
        assert_eq!(adler32(&data), (b << 16) | a);
    }

    #[test]
    fn test_streaming() {
        let mut hasher = Adler32::new();
        hasher.update(b"Wiki");
        hasher.update(b"pedia");
        assert_eq!(hasher.finalize(), adler32(b"Wikipedia"));
    }
}
