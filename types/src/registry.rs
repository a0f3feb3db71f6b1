//! Group → participant mapping published to the peering layer.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

use crate::{GroupId, NodeId};

/// Ordered consensus membership of one group.
///
/// Order reflects the configured membership order and is preserved as-is.
pub type ParticipantList = Vec<NodeId>;

/// Mapping from each initialized group to its participant list.
///
/// Built once during bootstrap and then moved into the peering service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupId, ParticipantList>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the participants of `group`, returning any list it replaces.
    pub fn insert(&mut self, group: GroupId, participants: ParticipantList) -> Option<ParticipantList> {
        self.groups.insert(group, participants)
    }

    pub fn get(&self, group: GroupId) -> Option<&[NodeId]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    pub fn contains(&self, group: GroupId) -> bool {
        self.groups.contains_key(&group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group ids in ascending order.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, GroupId, ParticipantList> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a GroupRegistry {
    type Item = (&'a GroupId, &'a ParticipantList);
    type IntoIter = btree_map::Iter<'a, GroupId, ParticipantList>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl FromIterator<(GroupId, ParticipantList)> for GroupRegistry {
    fn from_iter<I: IntoIterator<Item = (GroupId, ParticipantList)>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}
