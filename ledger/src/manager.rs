//! Ledger manager: the registry of per-group ledgers.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use consort_types::{ConfigTree, GroupId, KeyPair, NodeId};

use crate::genesis::{consensus_params_from_tree, resolve_group_config};
use crate::group_ledger::{GroupLedger, NodeRole};
use crate::params::{GroupParams, StorageParams};
use crate::LedgerError;

/// Owner of per-group ledger state.
///
/// Implementations register at most one ledger per group id.
pub trait LedgerManager {
    /// Build and register the ledger for `group` from its configuration
    /// subtree. Fails with [`LedgerError::DuplicateGroup`] when `group` is
    /// already registered; on any failure nothing is registered.
    fn init_single_ledger(
        &mut self,
        group: GroupId,
        data_dir: &Path,
        config: &ConfigTree,
    ) -> Result<(), LedgerError>;

    /// Parameters of a registered group.
    fn param_by_group_id(&self, group: GroupId) -> Option<&GroupParams>;

    /// All registered groups.
    fn group_list(&self) -> BTreeSet<GroupId>;

    /// Unregister `group`. Returns whether it was registered.
    fn remove_ledger(&mut self, group: GroupId) -> bool;
}

/// File-backed ledger manager.
///
/// Each group gets a data directory under the node's data dir and a genesis
/// loaded from its configuration subtree. The node's own id decides whether
/// it seals or observes in each group.
pub struct GroupLedgerManager {
    local: NodeId,
    ledgers: BTreeMap<GroupId, GroupLedger>,
}

impl GroupLedgerManager {
    pub fn new(key_pair: &KeyPair) -> Self {
        Self {
            local: key_pair.public,
            ledgers: BTreeMap::new(),
        }
    }

    pub fn ledger(&self, group: GroupId) -> Option<&GroupLedger> {
        self.ledgers.get(&group)
    }

    pub fn ledgers(&self) -> impl Iterator<Item = &GroupLedger> {
        self.ledgers.values()
    }

    /// Groups in which this node is a sealer.
    pub fn sealing_groups(&self) -> Vec<GroupId> {
        self.ledgers
            .values()
            .filter(|l| l.role() == NodeRole::Sealer)
            .map(GroupLedger::group_id)
            .collect()
    }
}

impl LedgerManager for GroupLedgerManager {
    fn init_single_ledger(
        &mut self,
        group: GroupId,
        data_dir: &Path,
        config: &ConfigTree,
    ) -> Result<(), LedgerError> {
        if self.ledgers.contains_key(&group) {
            return Err(LedgerError::DuplicateGroup(group));
        }

        let genesis = resolve_group_config(group, config)?;
        let consensus = consensus_params_from_tree(group, &genesis)?;
        let storage = StorageParams::for_group(data_dir, group);
        std::fs::create_dir_all(&storage.path).map_err(|source| LedgerError::Storage {
            path: storage.path.clone(),
            source,
        })?;

        let ledger = GroupLedger::new(
            GroupParams {
                group_id: group,
                consensus,
                storage,
            },
            &self.local,
        );
        tracing::debug!(
            group = %group,
            role = ?ledger.role(),
            participants = ledger.params().consensus.participants.len(),
            path = %ledger.data_path().display(),
            "group ledger registered"
        );
        self.ledgers.insert(group, ledger);
        Ok(())
    }

    fn param_by_group_id(&self, group: GroupId) -> Option<&GroupParams> {
        self.ledgers.get(&group).map(GroupLedger::params)
    }

    fn group_list(&self) -> BTreeSet<GroupId> {
        self.ledgers.keys().copied().collect()
    }

    fn remove_ledger(&mut self, group: GroupId) -> bool {
        self.ledgers.remove(&group).is_some()
    }
}
