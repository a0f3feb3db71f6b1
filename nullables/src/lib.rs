//! Nullable infrastructure for deterministic testing.
//!
//! The startup path talks to the ledger manager and the peering service only
//! through traits. This crate provides implementations that:
//! - Never touch the filesystem or network
//! - Record every call for assertions
//! - Can be told to fail for specific groups
//!
//! Usage: swap the real implementations for nullables in tests.

pub mod ledger;
pub mod peering;

pub use ledger::NullLedgerManager;
pub use peering::NullPeering;
