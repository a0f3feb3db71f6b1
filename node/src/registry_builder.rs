//! Group registry construction.
//!
//! The build runs in two phases. Every key of the group namespace is parsed
//! first, so a malformed key fails the build before any ledger is touched.
//! Groups are then initialized one at a time in document order. If one fails,
//! the ledgers this build already registered are removed again, newest first,
//! and the error is returned.

use consort_ledger::LedgerManager;
use consort_types::{ConfigTree, GroupId, GroupRegistry};

use crate::config::GlobalSettings;
use crate::group_init::init_single_group;
use crate::group_key::parse_group_entries;
use crate::InitializerError;

/// Initialize every group in `namespace` and collect the group → participants
/// table.
///
/// A missing namespace is treated as empty. Fails with
/// [`InitializerError::NoGroupsConfigured`] when no group entry exists.
pub fn build_group_registry<M: LedgerManager + ?Sized>(
    ledger_manager: &mut M,
    settings: &GlobalSettings,
    namespace: Option<&ConfigTree>,
) -> Result<GroupRegistry, InitializerError> {
    let entries = match namespace.map(parse_group_entries).transpose() {
        Ok(entries) => entries.unwrap_or_default(),
        Err(err) => {
            tracing::error!(error = %err, "parse group config failed");
            return Err(err);
        }
    };

    let mut registry = GroupRegistry::new();
    let mut registered: Vec<GroupId> = Vec::with_capacity(entries.len());
    for entry in &entries {
        tracing::trace!(
            key = entry.key,
            group = %entry.group_id,
            config = entry.subtree.value(),
            "load group config"
        );
        match init_single_group(ledger_manager, entry.group_id, &settings.data_dir, entry.subtree) {
            Ok(participants) => {
                registered.push(entry.group_id);
                registry.insert(entry.group_id, participants);
            }
            Err(err) => {
                tracing::error!(group = %entry.group_id, error = %err, "init single group failed");
                roll_back(ledger_manager, &registered);
                return Err(err);
            }
        }
    }

    if registry.is_empty() {
        tracing::error!("should init at least one group, please check configuration");
        return Err(InitializerError::NoGroupsConfigured);
    }
    Ok(registry)
}

fn roll_back<M: LedgerManager + ?Sized>(ledger_manager: &mut M, registered: &[GroupId]) {
    for group in registered.iter().rev() {
        if !ledger_manager.remove_ledger(*group) {
            tracing::warn!(group = %group, "ledger vanished before rollback");
        }
    }
    if !registered.is_empty() {
        tracing::debug!(groups = registered.len(), "rolled back group ledgers");
    }
}
