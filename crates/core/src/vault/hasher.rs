//! Content fingerprinting for change detection.

use std::fs::File;
use std::io::{BufReader, Read, Result};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the SHA-256 fingerprint of a file's full byte stream.
///
/// Fails with the underlying I/O error when the file cannot be opened or
/// read, typically because the authoring tool still holds a lock on it.
/// Callers treat that as transient and skip the file.
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Fingerprint of an in-memory byte slice (for testing).
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_is_deterministic() {
        let a = hash_bytes(b"solid body v1");
        let b = hash_bytes(b"solid body v1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_hash_differs_on_content_change() {
        assert_ne!(hash_bytes(b"rev A"), hash_bytes(b"rev B"));
    }

    #[test]
    fn test_hash_file_matches_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bracket.sldprt");
        fs::write(&path, b"binary-ish content").unwrap();

        assert_eq!(hash_file(&path).unwrap(), hash_bytes(b"binary-ish content"));
    }

    #[test]
    fn test_hash_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = hash_file(&dir.path().join("gone.sldprt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
