use consort_ledger::LedgerError;
use consort_types::{GroupId, ParseGroupIdError};
use thiserror::Error;

/// Why startup refused to bring up the node's groups.
#[derive(Debug, Error)]
pub enum InitializerError {
    #[error("malformed group config key {key:?}: {defect}")]
    MalformedGroupKey { key: String, defect: GroupKeyDefect },

    #[error("failed to initialize ledger for group {group}: {source}")]
    LedgerInitFailed {
        group: GroupId,
        #[source]
        source: LedgerError,
    },

    #[error("no group configured, the node needs at least one group")]
    NoGroupsConfigured,
}

/// What is wrong with a key in the group config namespace.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupKeyDefect {
    #[error("expected `group_config.<group id>`, found {0} part(s)")]
    WrongArity(usize),

    #[error(transparent)]
    InvalidGroupId(#[from] ParseGroupIdError),
}
