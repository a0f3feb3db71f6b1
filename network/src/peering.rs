//! Boundary between startup and the peering layer.

use consort_types::GroupRegistry;

/// Receiver of the group → participants mapping.
pub trait PeeringService {
    /// Install the routing table. Startup calls this once, after every group
    /// in `registry` has a registered ledger.
    fn set_group_to_participants(&mut self, registry: GroupRegistry);
}
