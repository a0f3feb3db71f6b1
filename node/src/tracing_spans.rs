//! Pre-built [`tracing::Span`] constructors for node startup.

use consort_types::GroupId;
use tracing::{info_span, Span};

/// Span covering the whole multi-group bootstrap.
pub fn bootstrap_span(data_dir: &str) -> Span {
    info_span!("bootstrap", data_dir = %data_dir)
}

/// Span covering the initialization of one group's ledger.
pub fn group_init_span(group: GroupId) -> Span {
    info_span!("group_init", group = %group)
}
