//! Ordered hierarchical configuration tree.
//!
//! Every node carries a scalar value (possibly empty) and an ordered list of
//! keyed children. Children keep document order and a key may repeat, so a
//! tree can represent configuration exactly as written rather than as a
//! sorted map. Trees are usually parsed from TOML, where tables become
//! children, scalars become values, and array elements become children with
//! an empty key.
//!
//! A tree read from a file remembers the file's directory on every node, and
//! path-valued settings are resolved against it with
//! [`ConfigTree::resolve_path`].

use std::path::{Path, PathBuf};

use crate::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigTree {
    value: String,
    children: Vec<(String, ConfigTree)>,
    base_dir: Option<PathBuf>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A leaf node holding `value`.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Builder-style append of a child subtree.
    pub fn with_child(mut self, key: impl Into<String>, child: ConfigTree) -> Self {
        self.push_child(key, child);
        self
    }

    /// Builder-style append of a leaf child.
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_child(key, Self::leaf(value))
    }

    pub fn push_child(&mut self, key: impl Into<String>, child: ConfigTree) {
        self.children.push((key.into(), child));
    }

    /// The scalar value of this node; empty for pure tables.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.children.is_empty()
    }

    /// Children in document order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &ConfigTree)> + '_ {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// First direct child named `key`.
    pub fn child(&self, key: &str) -> Option<&ConfigTree> {
        self.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Directory of the file this tree was read from.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Builder-style: set the base directory on this node and every
    /// descendant.
    pub fn with_base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.set_base_dir(dir.as_ref());
        self
    }

    fn set_base_dir(&mut self, dir: &Path) {
        self.base_dir = Some(dir.to_path_buf());
        for (_, child) in &mut self.children {
            child.set_base_dir(dir);
        }
    }

    /// Resolve a path-valued setting. Relative paths are joined onto the
    /// base directory when there is one; absolute paths are kept.
    pub fn resolve_path(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Walk `path` one child at a time. Path segments are matched literally,
    /// so keys containing `.` are addressed as a single segment.
    pub fn get(&self, path: &[&str]) -> Option<&ConfigTree> {
        path.iter().try_fold(self, |node, key| node.child(key))
    }

    /// Value at `path`, or `default` when the path is absent.
    pub fn get_or<'a>(&'a self, path: &[&str], default: &'a str) -> &'a str {
        self.get(path).map_or(default, |node| node.value())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = s.parse()?;
        Ok(Self::from_table(table))
    }

    /// Read and parse a TOML file. The tree's base directory is the file's
    /// parent directory.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_toml_str(&content)?;
        Ok(match path.parent() {
            Some(dir) => tree.with_base_dir(dir),
            None => tree,
        })
    }

    fn from_table(table: toml::Table) -> Self {
        let children = table
            .into_iter()
            .map(|(key, value)| (key, Self::from_toml_value(value)))
            .collect();
        Self {
            children,
            ..Self::default()
        }
    }

    fn from_toml_value(value: toml::Value) -> Self {
        match value {
            toml::Value::Table(table) => Self::from_table(table),
            toml::Value::Array(items) => Self {
                children: items
                    .into_iter()
                    .map(|item| (String::new(), Self::from_toml_value(item)))
                    .collect(),
                ..Self::default()
            },
            toml::Value::String(s) => Self::leaf(s),
            other => Self::leaf(other.to_string()),
        }
    }
}
