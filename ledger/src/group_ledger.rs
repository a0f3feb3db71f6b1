//! A single group's ledger instance.

use serde::{Deserialize, Serialize};
use std::path::Path;

use consort_types::{GroupId, NodeId};

use crate::params::GroupParams;

/// Whether this node takes part in a group's consensus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Listed among the group's participants; seals and votes.
    Sealer,
    /// Syncs the group's ledger without voting.
    Observer,
}

/// Ledger instance for one group, as registered with a ledger manager.
#[derive(Clone, Debug)]
pub struct GroupLedger {
    params: GroupParams,
    role: NodeRole,
}

impl GroupLedger {
    pub fn new(params: GroupParams, local: &NodeId) -> Self {
        let role = if params.consensus.participants.contains(local) {
            NodeRole::Sealer
        } else {
            NodeRole::Observer
        };
        Self { params, role }
    }

    pub fn group_id(&self) -> GroupId {
        self.params.group_id
    }

    pub fn params(&self) -> &GroupParams {
        &self.params
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn data_path(&self) -> &Path {
        &self.params.storage.path
    }
}
