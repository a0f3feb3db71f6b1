//! Group genesis loading.
//!
//! A group's configuration subtree either names a genesis file (its value is a
//! path, resolved against the directory of the config file it came from) or
//! holds the genesis inline as child tables. The genesis layout is:
//!
//! ```toml
//! [consensus]
//! consensus_type = "pbft"
//! max_trans_num = 1000
//! participants = ["<hex node id>", "<hex node id>"]
//! ```
//!
//! Participants may alternatively be written as `"node.0" = "<hex>"` keys
//! under `[consensus]`; they are read in document order.

use std::borrow::Cow;
use std::collections::HashSet;

use consort_types::{ConfigTree, GroupId, NodeId};

use crate::params::{ConsensusParams, ConsensusType, DEFAULT_MAX_TRANS_NUM};
use crate::LedgerError;

const CONSENSUS: &str = "consensus";
const PARTICIPANTS: &str = "participants";
const NODE_KEY_PREFIX: &str = "node.";

/// Turn a group's raw subtree into its genesis tree, loading the referenced
/// file when the subtree is a path.
pub fn resolve_group_config(
    group: GroupId,
    subtree: &ConfigTree,
) -> Result<Cow<'_, ConfigTree>, LedgerError> {
    let path = subtree.value().trim();
    if !path.is_empty() {
        return ConfigTree::from_toml_file(subtree.resolve_path(path))
            .map(Cow::Owned)
            .map_err(|source| LedgerError::Config { group, source });
    }
    if subtree.children().next().is_none() {
        return Err(LedgerError::InvalidGenesis {
            group,
            reason: "group config is empty".into(),
        });
    }
    Ok(Cow::Borrowed(subtree))
}

/// Read and validate the consensus section of a genesis tree.
pub fn consensus_params_from_tree(
    group: GroupId,
    genesis: &ConfigTree,
) -> Result<ConsensusParams, LedgerError> {
    let invalid = |reason: String| LedgerError::InvalidGenesis { group, reason };

    let consensus = genesis
        .child(CONSENSUS)
        .ok_or_else(|| invalid("missing [consensus] section".into()))?;

    let consensus_type = match consensus.child("consensus_type") {
        Some(node) => node.value().parse::<ConsensusType>().map_err(invalid)?,
        None => ConsensusType::default(),
    };

    let max_trans_num = match consensus.child("max_trans_num") {
        Some(node) => node
            .value()
            .parse::<u64>()
            .map_err(|e| invalid(format!("max_trans_num: {e}")))?,
        None => DEFAULT_MAX_TRANS_NUM,
    };
    if max_trans_num == 0 {
        return Err(invalid("max_trans_num must be positive".into()));
    }

    let raw: Vec<&str> = match consensus.child(PARTICIPANTS) {
        Some(list) => list.children().map(|(_, node)| node.value()).collect(),
        None => consensus
            .children()
            .filter(|(key, _)| key.starts_with(NODE_KEY_PREFIX))
            .map(|(_, node)| node.value())
            .collect(),
    };
    if raw.is_empty() {
        return Err(invalid("no consensus participants configured".into()));
    }

    let mut seen = HashSet::with_capacity(raw.len());
    let mut participants = Vec::with_capacity(raw.len());
    for (index, text) in raw.into_iter().enumerate() {
        let id: NodeId = text
            .parse()
            .map_err(|source| LedgerError::InvalidParticipant {
                group,
                index,
                source,
            })?;
        if !seen.insert(id) {
            return Err(invalid(format!("participant {id} is listed twice")));
        }
        participants.push(id);
    }

    Ok(ConsensusParams {
        consensus_type,
        max_trans_num,
        participants,
    })
}
