//! Multi-group bootstrap: ledger registration, then peering hand-off.
//!
//! The peering service only ever sees a registry whose every group already
//! has a registered ledger; on any failure it sees nothing at all.

use std::collections::BTreeSet;

use consort_ledger::{GroupLedgerManager, LedgerManager};
use consort_network::PeeringService;
use consort_types::{ConfigTree, GroupId, KeyPair};

use crate::config::{group_namespace, GlobalSettings};
use crate::registry_builder::build_group_registry;
use crate::tracing_spans::bootstrap_span;
use crate::InitializerError;

/// Bring up every configured group on `ledger_manager` and publish the
/// group → participants table to `peering`.
///
/// Returns the ids of the published groups. Errors from any step are returned
/// unchanged and leave `peering` untouched.
pub fn init_ledgers<M, P>(
    config: &ConfigTree,
    ledger_manager: &mut M,
    peering: &mut P,
) -> Result<BTreeSet<GroupId>, InitializerError>
where
    M: LedgerManager + ?Sized,
    P: PeeringService + ?Sized,
{
    let settings = GlobalSettings::from_tree(config);
    let _span = bootstrap_span(&settings.data_dir.to_string_lossy()).entered();
    tracing::debug!("init group config");

    let registry = build_group_registry(ledger_manager, &settings, group_namespace(config))?;
    let groups: BTreeSet<GroupId> = registry.group_ids().collect();

    tracing::info!(
        groups = ?groups,
        hosted = ledger_manager.group_list().len(),
        "groups initialized, publishing participants to peering"
    );
    peering.set_group_to_participants(registry);
    Ok(groups)
}

/// Node startup entry point: build the file-backed ledger manager from the
/// node's key pair and run [`init_ledgers`] on it.
///
/// On success the caller owns the manager holding every group ledger.
pub fn bootstrap<P: PeeringService + ?Sized>(
    config: &ConfigTree,
    key_pair: &KeyPair,
    peering: &mut P,
) -> Result<GroupLedgerManager, InitializerError> {
    let mut ledger_manager = GroupLedgerManager::new(key_pair);
    init_ledgers(config, &mut ledger_manager, peering)?;
    Ok(ledger_manager)
}
