//! Pluggable cryptographic adapter
//!
//! The genome encoder never hashes anything itself; it consumes a digest and
//! a keyed-hash primitive through this trait. Any collision-resistant
//! digest/MAC pair satisfies the contract. Adapter failures propagate
//! unchanged — the engine is deterministic, so retrying reproduces them.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

/// Digest + keyed-hash primitives consumed by the genome encoder
pub trait CryptoAdapter {
    /// Hex-encoded digest of `data`
    fn digest(&self, data: &[u8]) -> Result<String, CoreError>;

    /// Hex-encoded keyed hash of `data` under `key`
    fn keyed_hash(&self, data: &[u8], key: &[u8]) -> Result<String, CoreError>;
}

/// Default adapter: SHA-256 digests and HMAC-SHA256 keyed hashes
#[derive(Debug, Clone, Default)]
pub struct Sha256Adapter;

impl CryptoAdapter for Sha256Adapter {
    fn digest(&self, data: &[u8]) -> Result<String, CoreError> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Ok(hex::encode(hasher.finalize()))
    }

    fn keyed_hash(&self, data: &[u8], key: &[u8]) -> Result<String, CoreError> {
        let mut mac = HmacSha256::new_from_slice(key)
            .map_err(|e| CoreError::Adapter(e.to_string()))?;
        mac.update(data);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_hex_sha256() {
        let adapter = Sha256Adapter;
        let d = adapter.digest(b"").unwrap();
        assert_eq!(d.len(), 64);
        assert_eq!(
            d,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_keyed_hash_depends_on_key() {
        let adapter = Sha256Adapter;
        let a = adapter.keyed_hash(b"data", b"key-a").unwrap();
        let b = adapter.keyed_hash(b"data", b"key-b").unwrap();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
