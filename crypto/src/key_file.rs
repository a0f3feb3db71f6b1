//! Node key files.
//!
//! A key file holds the 32-byte Ed25519 private key as 64 hex characters on a
//! single line. Surrounding whitespace is ignored.

use std::path::Path;

use consort_types::{KeyPair, PrivateKey};
use zeroize::Zeroize;

use crate::keys::keypair_from_private;
use crate::CryptoError;

/// Load the node key pair from `path`.
pub fn load_keypair(path: impl AsRef<Path>) -> Result<KeyPair, CryptoError> {
    let path = path.as_ref();
    let mut content = std::fs::read_to_string(path).map_err(|source| CryptoError::KeyFileIo {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = hex::decode(content.trim());
    content.zeroize();
    let mut bytes = decoded.map_err(|e| CryptoError::MalformedKeyFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if bytes.len() != 32 {
        let reason = format!("expected 32 key bytes, got {}", bytes.len());
        bytes.zeroize();
        return Err(CryptoError::MalformedKeyFile {
            path: path.to_path_buf(),
            reason,
        });
    }
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    bytes.zeroize();
    Ok(keypair_from_private(PrivateKey(secret)))
}

/// Write the private half of `kp` to `path`, replacing any existing file.
pub fn write_keypair(path: impl AsRef<Path>, kp: &KeyPair) -> Result<(), CryptoError> {
    let path = path.as_ref();
    let mut encoded = hex::encode(kp.private.0);
    encoded.push('\n');
    let result = std::fs::write(path, encoded.as_bytes());
    encoded.zeroize();
    result.map_err(|source| CryptoError::KeyFileIo {
        path: path.to_path_buf(),
        source,
    })
}
