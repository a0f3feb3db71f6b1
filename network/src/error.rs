use consort_types::{GroupId, NodeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("group routing table has not been published")]
    NotReady,

    #[error("group {0} is not routed by this node")]
    UnknownGroup(GroupId),

    #[error("node {node} is not a participant of group {group}")]
    NotParticipant { group: GroupId, node: NodeId },
}
