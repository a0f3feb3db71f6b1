//! Single-group initialization.

use std::path::Path;

use consort_ledger::{LedgerError, LedgerManager};
use consort_types::{ConfigTree, GroupId, ParticipantList};

use crate::tracing_spans::group_init_span;
use crate::InitializerError;

/// Register the ledger for `group` and return its participants in configured
/// order.
///
/// On failure nothing registered by this call remains in `ledger_manager`.
pub fn init_single_group<M: LedgerManager + ?Sized>(
    ledger_manager: &mut M,
    group: GroupId,
    data_dir: &Path,
    subtree: &ConfigTree,
) -> Result<ParticipantList, InitializerError> {
    let _span = group_init_span(group).entered();

    ledger_manager
        .init_single_ledger(group, data_dir, subtree)
        .map_err(|source| InitializerError::LedgerInitFailed { group, source })?;

    let participants = match ledger_manager.param_by_group_id(group) {
        Some(params) => params.consensus.participants.clone(),
        None => {
            ledger_manager.remove_ledger(group);
            return Err(InitializerError::LedgerInitFailed {
                group,
                source: LedgerError::MissingParams(group),
            });
        }
    };

    tracing::debug!(
        group = %group,
        participants = participants.len(),
        "group initialized"
    );
    Ok(participants)
}
