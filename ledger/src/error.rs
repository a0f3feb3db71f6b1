use std::path::PathBuf;

use consort_types::{ConfigError, GroupId, ParseNodeIdError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger for group {0} is already registered")]
    DuplicateGroup(GroupId),

    #[error("group {group} genesis is invalid: {reason}")]
    InvalidGenesis { group: GroupId, reason: String },

    #[error("group {group} participant #{index} is not a valid node id: {source}")]
    InvalidParticipant {
        group: GroupId,
        index: usize,
        #[source]
        source: ParseNodeIdError,
    },

    #[error("group {group} config could not be loaded: {source}")]
    Config {
        group: GroupId,
        #[source]
        source: ConfigError,
    },

    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("group {0} has no consensus params")]
    MissingParams(GroupId),

    #[error("group {0} was rejected by the ledger manager")]
    Rejected(GroupId),
}
