//! # Output
//!
//! Delivery of encoded PNG bytes: base64 text for CSS `url(...)` values, or a
//! file on disk.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;

/// Prefix of a PNG data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Standard (padded) base64 of `bytes`.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// `data:image/png;base64,...`
pub fn to_data_uri(bytes: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}

/// Write `bytes` to `path`, replacing any existing file.
///
/// Failures are logged at `warn` and returned to the caller.
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    match fs::write(path, bytes) {
        Ok(()) => {
            log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }
        Err(e) => {
            log::warn!("failed to write {}: {}", path.display(), e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulerError;

    #[test]
    fn test_base64() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(to_base64(b"ruler"), "cnVsZXI=");
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(to_data_uri(b"ruler"), "data:image/png;base64,cnVsZXI=");
    }

    #[test]
    fn test_write_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("ruler-output-{}.bin", std::process::id()));
        write_file(&path, b"\x89PNG").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"\x89PNG");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_file_reports_failure() {
        let path = std::env::temp_dir()
            .join("ruler-missing-dir-for-test")
            .join("nested")
            .join("out.png");
        assert!(matches!(write_file(&path, b"x"), Err(RulerError::Io(_))));
    }
}
