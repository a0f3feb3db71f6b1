use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse the textual form of a [`crate::GroupId`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseGroupIdError {
    #[error("group id is empty")]
    Empty,

    #[error("group id {0:?} is not a decimal integer")]
    NotDecimal(String),

    #[error("group id {0:?} has leading zeros")]
    LeadingZero(String),

    #[error("group id {0:?} is out of range (max {max})", max = u16::MAX)]
    OutOfRange(String),
}

/// Failure to parse the hex form of a [`crate::NodeId`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseNodeIdError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("node id must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
