//! Cryptographic digests of the analyzed buffer.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex-encoded digests reported next to the simple checksums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digests {
    pub md5: String,
    pub sha256: String,
    pub blake3: String,
}

impl Digests {
    pub fn compute(data: &[u8]) -> Self {
        Self {
            md5: md5_digest(data),
            sha256: sha256_digest(data),
            blake3: blake3_digest(data),
        }
    }
}

/// Computes the MD5 digest of the given data and returns it as a hex string.
pub fn md5_digest(data: &[u8]) -> String {
    hex::encode(md5::compute(data).0)
}

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn sha256_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Computes the BLAKE3 digest of the given data and returns it as a hex string.
pub fn blake3_digest(data: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    hasher.finalize().to_hex().to_string()
}
