//! Per-group routing table.

use consort_types::{GroupId, GroupRegistry, NodeId};

use crate::peering::PeeringService;
use crate::NetworkError;

/// Routes consensus traffic by group using the published registry.
pub struct GroupRouter {
    /// This node's own identity; never a routing target.
    local: NodeId,
    table: Option<GroupRegistry>,
}

impl GroupRouter {
    pub fn new(local: NodeId) -> Self {
        Self { local, table: None }
    }

    pub fn is_ready(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&GroupRegistry> {
        self.table.as_ref()
    }

    /// Participants of `group`, in configured order.
    pub fn participants(&self, group: GroupId) -> Result<&[NodeId], NetworkError> {
        let table = self.table.as_ref().ok_or(NetworkError::NotReady)?;
        table.get(group).ok_or(NetworkError::UnknownGroup(group))
    }

    pub fn is_participant(&self, group: GroupId, node: &NodeId) -> bool {
        self.participants(group)
            .map(|p| p.contains(node))
            .unwrap_or(false)
    }

    /// Groups in which `node` participates, ascending.
    pub fn groups_of(&self, node: &NodeId) -> Vec<GroupId> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        table
            .iter()
            .filter(|(_, participants)| participants.contains(node))
            .map(|(group, _)| *group)
            .collect()
    }

    /// Peers that must receive this node's consensus messages for `group`.
    pub fn peers_for(&self, group: GroupId) -> Result<Vec<NodeId>, NetworkError> {
        Ok(self
            .participants(group)?
            .iter()
            .filter(|id| **id != self.local)
            .copied()
            .collect())
    }

    /// Accept a consensus message for `group` only from one of its participants.
    pub fn check_sender(&self, group: GroupId, sender: &NodeId) -> Result<(), NetworkError> {
        if self.participants(group)?.contains(sender) {
            Ok(())
        } else {
            Err(NetworkError::NotParticipant {
                group,
                node: *sender,
            })
        }
    }
}

impl PeeringService for GroupRouter {
    fn set_group_to_participants(&mut self, registry: GroupRegistry) {
        if self.table.is_some() {
            tracing::warn!("replacing an already published group routing table");
        }
        tracing::info!(groups = registry.len(), "group routing table installed");
        self.table = Some(registry);
    }
}
