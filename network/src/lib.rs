//! Peering layer for the consort node.
//!
//! Consensus traffic is routed per group: a message for group `g` goes to the
//! participants of `g` and nobody else. The routing table is the group
//! registry published once at startup through [`PeeringService`].

pub mod error;
pub mod peering;
pub mod router;

pub use error::NetworkError;
pub use peering::PeeringService;
pub use router::GroupRouter;
