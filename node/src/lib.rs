//! consort node startup.
//!
//! Brings up every consensus group configured for the node:
//! - Parses `group_config.<id>` keys from the `[group]` section
//! - Registers one ledger per group with the ledger manager
//! - Collects each group's ordered participant list
//! - Publishes the group → participants table to the peering layer
//!
//! Startup is all-or-nothing: a malformed key, a failed ledger or an empty
//! group set aborts it, and no ledger registered by the attempt survives.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod group_init;
pub mod group_key;
pub mod logging;
pub mod registry_builder;
pub mod tracing_spans;

pub use bootstrap::{bootstrap, init_ledgers};
pub use config::{GlobalSettings, LogSettings};
pub use error::{GroupKeyDefect, InitializerError};
pub use group_init::init_single_group;
pub use group_key::{parse_group_entries, parse_group_key, GroupConfigEntry};
pub use logging::{init_logging, init_tracing, LogFormat};
pub use registry_builder::build_group_registry;
