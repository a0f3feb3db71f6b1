//! End-to-end bootstrap tests: configuration tree → ledger manager →
//! peering hand-off, with both the nullable and the file-backed ledger
//! manager.

use std::collections::BTreeSet;
use std::path::Path;

use consort_crypto::keypair_from_seed;
use consort_ledger::{LedgerError, LedgerManager, NodeRole};
use consort_network::GroupRouter;
use consort_node::{bootstrap, init_ledgers, init_tracing, parse_group_entries, InitializerError};
use consort_nullables::{NullLedgerManager, NullPeering};
use consort_types::{ConfigTree, GroupId, NodeId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn node(seed: u8) -> NodeId {
    keypair_from_seed(&[seed; 32]).public
}

fn inline_group(participants: &[NodeId]) -> ConfigTree {
    let list = participants
        .iter()
        .fold(ConfigTree::new(), |t, p| t.with_value("", p.to_hex()));
    ConfigTree::new().with_child("consensus", ConfigTree::new().with_child("participants", list))
}

fn config(entries: Vec<(&str, ConfigTree)>) -> ConfigTree {
    let ns = entries
        .into_iter()
        .fold(ConfigTree::new(), |ns, (key, tree)| ns.with_child(key, tree));
    ConfigTree::new().with_child("group", ns)
}

fn write_genesis(dir: &Path, name: &str, participants: &[NodeId]) -> String {
    let list: Vec<String> = participants
        .iter()
        .map(|p| format!("\"{}\"", p.to_hex()))
        .collect();
    let path = dir.join(name);
    std::fs::write(
        &path,
        format!(
            "[consensus]\nconsensus_type = \"pbft\"\nmax_trans_num = 1000\nparticipants = [{}]\n",
            list.join(", ")
        ),
    )
    .expect("write genesis");
    path.to_string_lossy().into_owned()
}

// ---------------------------------------------------------------------------
// Nullable ledger manager
// ---------------------------------------------------------------------------

#[test]
fn n_groups_are_registered_and_published() {
    let cfg = config(vec![
        ("group_config.1", inline_group(&[node(1)])),
        ("group_config.2", inline_group(&[node(2)])),
        ("group_config.10", inline_group(&[node(3)])),
    ]);
    let mut manager = NullLedgerManager::new();
    let mut peering = NullPeering::new();

    init_ledgers(&cfg, &mut manager, &mut peering).unwrap();

    let expected = BTreeSet::from([GroupId::new(1), GroupId::new(2), GroupId::new(10)]);
    assert_eq!(manager.group_list(), expected);
    assert_eq!(peering.publish_count(), 1);
    let published: BTreeSet<_> = peering.last().unwrap().group_ids().collect();
    assert_eq!(published, expected);
}

#[test]
fn empty_namespace_fails_without_publication() {
    let mut manager = NullLedgerManager::new();
    let mut peering = NullPeering::new();

    let err = init_ledgers(&config(vec![]), &mut manager, &mut peering).unwrap_err();
    assert!(matches!(err, InitializerError::NoGroupsConfigured));

    let err = init_ledgers(&ConfigTree::new(), &mut manager, &mut peering).unwrap_err();
    assert!(matches!(err, InitializerError::NoGroupsConfigured));

    assert_eq!(peering.publish_count(), 0);
}

#[test]
fn wrong_arity_keys_fail_with_no_registration() {
    for bad in ["group_config.1.extra", "group_config"] {
        let cfg = config(vec![
            ("group_config.1", inline_group(&[node(1)])),
            (bad, inline_group(&[node(2)])),
        ]);
        let mut manager = NullLedgerManager::new();
        let mut peering = NullPeering::new();

        let err = init_ledgers(&cfg, &mut manager, &mut peering).unwrap_err();
        assert!(
            matches!(&err, InitializerError::MalformedGroupKey { key, .. } if key == bad),
            "unexpected error for {bad}: {err}"
        );
        assert!(manager.group_list().is_empty());
        assert_eq!(peering.publish_count(), 0);
    }
}

#[test]
fn non_numeric_group_id_fails() {
    let cfg = config(vec![("group_config.abc", inline_group(&[node(1)]))]);
    let mut manager = NullLedgerManager::new();
    let mut peering = NullPeering::new();

    let err = init_ledgers(&cfg, &mut manager, &mut peering).unwrap_err();
    assert!(matches!(err, InitializerError::MalformedGroupKey { .. }));
    assert_eq!(peering.publish_count(), 0);
}

#[test]
fn duplicate_group_id_fails_at_registration() {
    let cfg = config(vec![
        ("group_config.1", inline_group(&[node(1)])),
        ("group_config..1", inline_group(&[node(2)])),
    ]);
    let mut manager = NullLedgerManager::new();
    let mut peering = NullPeering::new();

    let err = init_ledgers(&cfg, &mut manager, &mut peering).unwrap_err();
    assert!(matches!(
        err,
        InitializerError::LedgerInitFailed { group, source: LedgerError::DuplicateGroup(_) }
            if group == GroupId::new(1)
    ));
    assert!(manager.group_list().is_empty());
    assert_eq!(peering.publish_count(), 0);
}

#[test]
fn participant_order_is_published_verbatim() {
    let (a, b, c) = (node(7), node(3), node(5));
    let cfg = config(vec![("group_config.1", inline_group(&[a, b, c, a]))]);
    let mut manager = NullLedgerManager::new();
    let mut peering = NullPeering::new();

    init_ledgers(&cfg, &mut manager, &mut peering).unwrap();
    assert_eq!(peering.last().unwrap().get(GroupId::new(1)).unwrap(), &[a, b, c, a]);
}

#[test]
fn parsing_twice_is_identical() {
    let cfg = config(vec![
        ("group_config.4", inline_group(&[node(1)])),
        ("unrelated", ConfigTree::leaf("x")),
        ("group_config.2", inline_group(&[node(2)])),
    ]);
    let ns = cfg.child("group").unwrap();
    let first = parse_group_entries(ns).unwrap();
    let second = parse_group_entries(ns).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

// ---------------------------------------------------------------------------
// File-backed ledger manager
// ---------------------------------------------------------------------------

#[test]
fn bootstrap_from_toml_with_genesis_files() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let kp = keypair_from_seed(&[1; 32]);
    let other = node(2);
    let g1 = write_genesis(dir.path(), "group.1.toml", &[kp.public, other]);
    let g2 = write_genesis(dir.path(), "group.2.toml", &[other]);
    let data_dir = dir.path().join("data");

    let toml = format!(
        "[group]\ngroup_data_path = {:?}\n\"group_config.2\" = {:?}\n\"group_config.1\" = {:?}\n",
        data_dir.to_string_lossy(),
        g2,
        g1
    );
    let cfg = ConfigTree::from_toml_str(&toml).unwrap();
    let mut router = GroupRouter::new(kp.public);

    let manager = bootstrap(&cfg, &kp, &mut router).unwrap();

    assert_eq!(
        manager.group_list(),
        BTreeSet::from([GroupId::new(1), GroupId::new(2)])
    );
    assert!(data_dir.join("group1").is_dir());
    assert!(data_dir.join("group2").is_dir());
    let hosted: Vec<_> = manager.ledgers().map(|l| l.group_id()).collect();
    assert_eq!(hosted, vec![GroupId::new(1), GroupId::new(2)]);
    assert_eq!(manager.ledger(GroupId::new(1)).unwrap().role(), NodeRole::Sealer);
    assert_eq!(manager.ledger(GroupId::new(2)).unwrap().role(), NodeRole::Observer);

    assert_eq!(router.participants(GroupId::new(1)).unwrap(), &[kp.public, other]);
    assert_eq!(router.peers_for(GroupId::new(1)).unwrap(), vec![other]);
    assert_eq!(router.groups_of(&kp.public), vec![GroupId::new(1)]);
}

#[test]
fn bootstrap_with_inline_group_tables() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let kp = keypair_from_seed(&[1; 32]);
    let toml = format!(
        r#"
        [group]
        group_data_path = {:?}

        [group."group_config.3".consensus]
        consensus_type = "raft"
        participants = ["{}"]
        "#,
        dir.path().to_string_lossy(),
        kp.public.to_hex()
    );
    let cfg = ConfigTree::from_toml_str(&toml).unwrap();
    let mut router = GroupRouter::new(kp.public);

    let manager = bootstrap(&cfg, &kp, &mut router).unwrap();
    let params = manager.param_by_group_id(GroupId::new(3)).unwrap();
    assert_eq!(params.consensus.participants, vec![kp.public]);
    assert!(router.is_ready());
}

#[test]
fn bad_genesis_aborts_and_leaves_router_unset() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let kp = keypair_from_seed(&[1; 32]);
    let good = write_genesis(dir.path(), "group.1.toml", &[kp.public]);
    let bad = write_genesis(dir.path(), "group.2.toml", &[]);

    let cfg = config(vec![
        ("group_data_path", ConfigTree::leaf(dir.path().to_string_lossy())),
        ("group_config.1", ConfigTree::leaf(good)),
        ("group_config.2", ConfigTree::leaf(bad)),
    ]);
    let mut router = GroupRouter::new(kp.public);

    let err = bootstrap(&cfg, &kp, &mut router).err().unwrap();
    assert!(matches!(
        err,
        InitializerError::LedgerInitFailed { group, source: LedgerError::InvalidGenesis { .. } }
            if group == GroupId::new(2)
    ));
    assert!(!router.is_ready());
}

#[test]
fn missing_genesis_file_aborts() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let kp = keypair_from_seed(&[1; 32]);
    let cfg = config(vec![
        ("group_data_path", ConfigTree::leaf(dir.path().to_string_lossy())),
        ("group_config.1", ConfigTree::leaf("/nonexistent/group.1.toml")),
    ]);
    let mut router = GroupRouter::new(kp.public);

    let err = bootstrap(&cfg, &kp, &mut router).err().unwrap();
    assert!(matches!(
        err,
        InitializerError::LedgerInitFailed { source: LedgerError::Config { .. }, .. }
    ));
    assert!(!router.is_ready());
}

#[test]
fn genesis_files_resolve_next_to_the_config_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let kp = keypair_from_seed(&[1; 32]);
    write_genesis(dir.path(), "group.1.toml", &[kp.public]);
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[group]\ngroup_data_path = {:?}\n\"group_config.1\" = \"group.1.toml\"\n",
            dir.path().join("data").to_string_lossy()
        ),
    )
    .unwrap();

    let cfg = ConfigTree::from_toml_file(&config_path).unwrap();
    let mut router = GroupRouter::new(kp.public);
    let manager = bootstrap(&cfg, &kp, &mut router).unwrap();

    assert_eq!(manager.group_list(), BTreeSet::from([GroupId::new(1)]));
    assert_eq!(router.participants(GroupId::new(1)).unwrap(), &[kp.public]);
}

#[test]
fn shipped_sample_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../conf/config.toml");
    let cfg = ConfigTree::from_toml_file(path).unwrap();
    let entries = parse_group_entries(cfg.child("group").unwrap()).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.group_id).collect();
    assert_eq!(ids, vec![GroupId::new(1), GroupId::new(2)]);

    for entry in &entries {
        let genesis = consort_ledger::resolve_group_config(entry.group_id, entry.subtree).unwrap();
        consort_ledger::consensus_params_from_tree(entry.group_id, &genesis).unwrap();
    }
}
