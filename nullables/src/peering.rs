//! Nullable peering: record published routing tables.

use consort_network::PeeringService;
use consort_types::GroupRegistry;

/// A peering service that keeps every registry it is handed.
#[derive(Default)]
pub struct NullPeering {
    published: Vec<GroupRegistry>,
}

impl NullPeering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registry published so far, oldest first.
    pub fn published(&self) -> &[GroupRegistry] {
        &self.published
    }

    /// The most recent registry, if any was published.
    pub fn last(&self) -> Option<&GroupRegistry> {
        self.published.last()
    }

    pub fn publish_count(&self) -> usize {
        self.published.len()
    }
}

impl PeeringService for NullPeering {
    fn set_group_to_participants(&mut self, registry: GroupRegistry) {
        self.published.push(registry);
    }
}
