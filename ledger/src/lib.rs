//! Per-group ledger management.
//!
//! A node hosts one ledger per consensus group. The [`LedgerManager`] trait is
//! the boundary the startup path talks to: it registers a ledger for a group
//! from that group's configuration subtree and exposes the group's consensus
//! parameters afterwards. [`GroupLedgerManager`] is the file-backed
//! implementation used by the node.

pub mod error;
pub mod genesis;
pub mod group_ledger;
pub mod manager;
pub mod params;

pub use error::LedgerError;
pub use genesis::{consensus_params_from_tree, resolve_group_config};
pub use group_ledger::{GroupLedger, NodeRole};
pub use manager::{GroupLedgerManager, LedgerManager};
pub use params::{ConsensusParams, ConsensusType, GroupParams, StorageParams};
