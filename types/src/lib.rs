//! Fundamental types for the consort node.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! group identifiers, participant identities, key material, the group registry
//! handed to peering, and the ordered configuration tree read at startup.

pub mod config_tree;
pub mod error;
pub mod group;
pub mod keys;
pub mod registry;

pub use config_tree::ConfigTree;
pub use error::{ConfigError, ParseGroupIdError, ParseNodeIdError};
pub use group::GroupId;
pub use keys::{KeyPair, NodeId, PrivateKey};
pub use registry::{GroupRegistry, ParticipantList};
