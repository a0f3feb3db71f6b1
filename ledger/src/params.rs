//! Group ledger parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use consort_types::{GroupId, NodeId};

/// Default cap on transactions per block when the genesis omits it.
pub const DEFAULT_MAX_TRANS_NUM: u64 = 1000;

/// Consensus algorithm a group runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusType {
    #[default]
    Pbft,
    Raft,
}

impl ConsensusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pbft => "pbft",
            Self::Raft => "raft",
        }
    }
}

impl fmt::Display for ConsensusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsensusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pbft" => Ok(Self::Pbft),
            "raft" => Ok(Self::Raft),
            other => Err(format!("unknown consensus type {other:?}")),
        }
    }
}

/// Consensus parameters of one group, as declared by its genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    pub consensus_type: ConsensusType,
    pub max_trans_num: u64,
    /// Consensus participants in configured order.
    pub participants: Vec<NodeId>,
}

/// Where a group's ledger keeps its data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageParams {
    pub path: PathBuf,
}

impl StorageParams {
    /// `<data_dir>/group<id>`
    pub fn for_group(data_dir: &std::path::Path, group: GroupId) -> Self {
        Self {
            path: data_dir.join(format!("group{group}")),
        }
    }
}

/// Everything a registered group ledger was built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    pub group_id: GroupId,
    pub consensus: ConsensusParams,
    pub storage: StorageParams,
}
