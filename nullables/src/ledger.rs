//! Nullable ledger manager: in-memory group registration.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use consort_ledger::params::DEFAULT_MAX_TRANS_NUM;
use consort_ledger::{
    ConsensusParams, ConsensusType, GroupParams, LedgerError, LedgerManager, StorageParams,
};
use consort_types::{ConfigTree, GroupId, NodeId};

/// A ledger manager that registers groups in memory.
///
/// Participants are read from the inline `consensus.participants` list of the
/// subtree exactly as written, duplicates included. Everything else takes
/// defaults. No directories are created.
#[derive(Default)]
pub struct NullLedgerManager {
    groups: BTreeMap<GroupId, GroupParams>,
    failing: HashSet<GroupId>,
    init_calls: Vec<(GroupId, PathBuf)>,
    removed: Vec<GroupId>,
}

impl NullLedgerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future `init_single_ledger` call for `group` fail.
    pub fn fail_group(&mut self, group: GroupId) {
        self.failing.insert(group);
    }

    /// Every `init_single_ledger` call received, in order.
    pub fn init_calls(&self) -> &[(GroupId, PathBuf)] {
        &self.init_calls
    }

    /// Every group unregistered through `remove_ledger`, in order.
    pub fn removed(&self) -> &[GroupId] {
        &self.removed
    }

    fn read_params(
        group: GroupId,
        data_dir: &Path,
        config: &ConfigTree,
    ) -> Result<GroupParams, LedgerError> {
        let participants: Vec<NodeId> = config
            .get(&["consensus", "participants"])
            .map(|list| {
                list.children()
                    .enumerate()
                    .map(|(index, (_, node))| {
                        node.value()
                            .parse()
                            .map_err(|source| LedgerError::InvalidParticipant {
                                group,
                                index,
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        if participants.is_empty() {
            return Err(LedgerError::InvalidGenesis {
                group,
                reason: "no consensus participants configured".into(),
            });
        }
        Ok(GroupParams {
            group_id: group,
            consensus: ConsensusParams {
                consensus_type: ConsensusType::default(),
                max_trans_num: DEFAULT_MAX_TRANS_NUM,
                participants,
            },
            storage: StorageParams::for_group(data_dir, group),
        })
    }
}

impl LedgerManager for NullLedgerManager {
    fn init_single_ledger(
        &mut self,
        group: GroupId,
        data_dir: &Path,
        config: &ConfigTree,
    ) -> Result<(), LedgerError> {
        self.init_calls.push((group, data_dir.to_path_buf()));
        if self.failing.contains(&group) {
            return Err(LedgerError::Rejected(group));
        }
        if self.groups.contains_key(&group) {
            return Err(LedgerError::DuplicateGroup(group));
        }
        let params = Self::read_params(group, data_dir, config)?;
        self.groups.insert(group, params);
        Ok(())
    }

    fn param_by_group_id(&self, group: GroupId) -> Option<&GroupParams> {
        self.groups.get(&group)
    }

    fn group_list(&self) -> BTreeSet<GroupId> {
        self.groups.keys().copied().collect()
    }

    fn remove_ledger(&mut self, group: GroupId) -> bool {
        self.removed.push(group);
        self.groups.remove(&group).is_some()
    }
}
