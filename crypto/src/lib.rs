//! Key material for the consort node.
//!
//! - **Ed25519** key pairs; the public key is the node's [`consort_types::NodeId`]
//! - Hex-encoded key files holding the private key

pub mod error;
pub mod key_file;
pub mod keys;

pub use error::CryptoError;
pub use key_file::{load_keypair, write_keypair};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
