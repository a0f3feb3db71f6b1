//! Ed25519 key generation.

use consort_types::{KeyPair, NodeId, PrivateKey};
use ed25519_dalek::SigningKey;
use zeroize::Zeroize;

use crate::CryptoError;

/// Generate a new Ed25519 key pair from the OS random source.
pub fn generate_keypair() -> Result<KeyPair, CryptoError> {
    let mut seed = [0u8; 32];
    getrandom::getrandom(&mut seed).map_err(|e| CryptoError::Entropy(e.to_string()))?;
    let kp = keypair_from_seed(&seed);
    seed.zeroize();
    Ok(kp)
}

/// Derive the node id (public key) from a private key.
pub fn public_from_private(private: &PrivateKey) -> NodeId {
    let signing_key = SigningKey::from_bytes(&private.0);
    NodeId(signing_key.verifying_key().to_bytes())
}

/// Reconstruct a full key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> KeyPair {
    let public = public_from_private(&private);
    KeyPair { public, private }
}

/// Derive a key pair from a 32-byte seed (deterministic).
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    KeyPair {
        public: NodeId(signing_key.verifying_key().to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}
