//! Page snapshot and host event DTOs.
//!
//! DESIGN
//! ======
//! Bug ids arrive from markup `data-*` attributes, so the same bug can be
//! encoded as `123` or `"123"` depending on how the page serialized it. Both
//! decode to the same [`BugId`] so baseline lookups never miss on encoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque bug identifier, unique within one planning session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BugId(String);

impl BugId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BugId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for BugId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for BugId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for BugId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(D::Error::custom("bug id must not be empty"));
                }
                Ok(Self(trimmed.to_owned()))
            }
            serde_json::Value::Number(number) => match number.as_u64() {
                Some(int) => Ok(Self::from(int)),
                None => Err(D::Error::custom("bug id must be a non-negative integer")),
            },
            _ => Err(D::Error::custom("expected bug id string or number")),
        }
    }
}

/// Which of the two planning tables a bug sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// The sprint table. Page markup names it `bugs_table`.
    #[serde(alias = "bugs")]
    Sprint,
    /// The backlog table.
    Backlog,
}

impl ListKind {
    /// The list a bug lands in when toggled away from `self`.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Sprint => Self::Backlog,
            Self::Backlog => Self::Sprint,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sprint => "sprint",
            Self::Backlog => "backlog",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bug row as rendered on page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugRecord {
    pub id: BugId,
    /// Story points; rows rendered without a value count as zero.
    #[serde(default, deserialize_with = "deserialize_points")]
    pub points: u32,
    /// Table the row was rendered into.
    #[serde(rename = "list", alias = "original_list")]
    pub original_list: ListKind,
}

impl BugRecord {
    #[must_use]
    pub fn new(id: impl Into<BugId>, points: u32, original_list: ListKind) -> Self {
        Self { id: id.into(), points, original_list }
    }
}

/// Initial membership embedded in the planning page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub bugs: Vec<BugRecord>,
    /// Explicit baseline. When absent, the baseline is every record rendered
    /// into the sprint table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_bugs: Option<Vec<BugId>>,
}

/// User event forwarded by the host page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostEvent {
    /// A bug row was toggled from one table to the other.
    Move { bug_id: BugId, from: ListKind, to: ListKind },
    /// The sprint form is being submitted.
    Submit,
    /// The page is about to unload.
    Unload,
    /// The server accepted the last submission.
    Saved,
}

fn deserialize_points<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => match number.as_u64().map(u32::try_from) {
            Some(Ok(points)) => Ok(points),
            _ => Err(D::Error::custom("story points must be a non-negative integer")),
        },
        serde_json::Value::String(raw) if raw.trim().is_empty() => Ok(0),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom("story points must be a non-negative integer")),
        _ => Err(D::Error::custom("expected story points number")),
    }
}
