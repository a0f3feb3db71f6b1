//! Consensus group identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseGroupIdError;

/// Identifies one consensus group hosted by the node.
///
/// The textual form is canonical decimal: parsing accepts exactly the strings
/// that [`fmt::Display`] produces, so a group id always round-trips through a
/// configuration key without loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u16);

impl GroupId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for GroupId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = ParseGroupIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseGroupIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseGroupIdError::NotDecimal(s.to_string()));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(ParseGroupIdError::LeadingZero(s.to_string()));
        }
        s.parse::<u16>()
            .map(Self)
            .map_err(|_| ParseGroupIdError::OutOfRange(s.to_string()))
    }
}
