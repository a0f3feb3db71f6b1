//! Group config key parsing.
//!
//! Keys under the group namespace have the form `group_config.<group id>`.
//! A key is recognised by its first `.`-delimited token; keys with any other
//! first token belong to other settings and are ignored. A recognised key
//! must split into exactly two tokens, adjacent delimiters counting as one.

use consort_types::{ConfigTree, GroupId};

use crate::{GroupKeyDefect, InitializerError};

pub const GROUP_CONFIG_TOKEN: &str = "group_config";
pub const KEY_DELIMITER: char = '.';

/// One `group_config.<id>` entry of the group namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupConfigEntry<'a> {
    /// The key as written.
    pub key: &'a str,
    /// Namespace token, always [`GROUP_CONFIG_TOKEN`].
    pub namespace: &'a str,
    pub group_id: GroupId,
    /// The group's raw configuration subtree.
    pub subtree: &'a ConfigTree,
}

/// Split on [`KEY_DELIMITER`], compressing runs of adjacent delimiters.
///
/// Empty tokens survive only at the ends: `a..b` gives `[a, b]`, `a.b.` gives
/// `[a, b, ""]`.
fn split_key(key: &str) -> Vec<&str> {
    let tokens: Vec<&str> = key.split(KEY_DELIMITER).collect();
    let last = tokens.len() - 1;
    tokens
        .into_iter()
        .enumerate()
        .filter(|(i, token)| !token.is_empty() || *i == 0 || *i == last)
        .map(|(_, token)| token)
        .collect()
}

/// Decide whether `key` names a group entry and extract its group id.
///
/// Returns `Ok(None)` for keys outside the `group_config` namespace.
pub fn parse_group_key(key: &str) -> Result<Option<GroupId>, InitializerError> {
    let tokens = split_key(key);
    if tokens[0] != GROUP_CONFIG_TOKEN {
        return Ok(None);
    }
    let malformed = |defect: GroupKeyDefect| InitializerError::MalformedGroupKey {
        key: key.to_string(),
        defect,
    };
    match tokens.as_slice() {
        [_, id] => id
            .parse::<GroupId>()
            .map(Some)
            .map_err(|e| malformed(e.into())),
        _ => Err(malformed(GroupKeyDefect::WrongArity(tokens.len()))),
    }
}

/// Parse every group entry of the namespace node, in document order.
///
/// Pure: nothing outside `namespace` is read and nothing is registered, so
/// parsing the same tree twice yields the same entries.
pub fn parse_group_entries(namespace: &ConfigTree) -> Result<Vec<GroupConfigEntry<'_>>, InitializerError> {
    let mut entries = Vec::new();
    for (key, subtree) in namespace.children() {
        if let Some(group_id) = parse_group_key(key)? {
            entries.push(GroupConfigEntry {
                key,
                namespace: GROUP_CONFIG_TOKEN,
                group_id,
                subtree,
            });
        }
    }
    Ok(entries)
}
