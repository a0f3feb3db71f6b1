//! Node-wide settings read from the configuration tree.
//!
//! ```toml
//! [group]
//! group_data_path = "data/"
//! "group_config.1" = "group.1.toml"
//!
//! [log]
//! level = "info"
//! format = "human"
//! ```

use std::path::PathBuf;

use consort_types::ConfigTree;

use crate::LogFormat;

/// Name of the section holding group entries and the group data path.
pub const GROUP_NAMESPACE: &str = "group";
pub const GROUP_DATA_PATH_KEY: &str = "group_data_path";
pub const DEFAULT_GROUP_DATA_PATH: &str = "data/";

/// Settings shared by every group, read once at the start of bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalSettings {
    /// Parent directory of every group's ledger data.
    pub data_dir: PathBuf,
}

impl GlobalSettings {
    pub fn from_tree(config: &ConfigTree) -> Self {
        Self {
            data_dir: PathBuf::from(config.get_or(
                &[GROUP_NAMESPACE, GROUP_DATA_PATH_KEY],
                DEFAULT_GROUP_DATA_PATH,
            )),
        }
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_GROUP_DATA_PATH),
        }
    }
}

/// The `[group]` node, if the config has one.
pub fn group_namespace(config: &ConfigTree) -> Option<&ConfigTree> {
    config.child(GROUP_NAMESPACE)
}

/// Logging settings from the `[log]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `"info"` or `"debug,consort_node=trace"`.
    pub level: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Fails on an unknown `format`. Runs before any subscriber exists, so
    /// the error goes back to the caller rather than to the log.
    pub fn from_tree(config: &ConfigTree) -> Result<Self, String> {
        Ok(Self {
            level: config.get_or(&["log", "level"], "info").to_string(),
            format: config.get_or(&["log", "format"], "human").parse()?,
        })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Human,
        }
    }
}
