use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("OS random source failed: {0}")]
    Entropy(String),

    #[error("key file {path}: {source}")]
    KeyFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key file {path} is malformed: {reason}")]
    MalformedKeyFile { path: PathBuf, reason: String },
}
