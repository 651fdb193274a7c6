//! Tracker error taxonomy.
//!
//! Every failure is detected synchronously inside the call that caused it and
//! leaves tracker state untouched. The host turns errors into user-facing
//! feedback through [`ErrorCode`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::{BugId, ListKind};

/// Stable machine-readable identity for an error, surfaced to the host.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Errors produced by [`crate::state::sprint_bugs::SprintBugTracker`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// The bug id was not part of the initial page snapshot.
    #[error("unknown bug: {0}")]
    UnknownBug(BugId),

    /// Source and destination lists are the same.
    #[error("bug {bug_id} moved from {list} to itself")]
    SameList { bug_id: BugId, list: ListKind },

    /// The host reported a source list the bug is not currently in.
    #[error("bug {bug_id} is on the {actual} list, not {reported}")]
    ListMismatch { bug_id: BugId, reported: ListKind, actual: ListKind },

    /// A pending bug id contains the hidden-field delimiter and would be
    /// read back as several ids.
    #[error("bug {bug_id} contains the id separator {separator:?}")]
    SeparatorInId { bug_id: BugId, separator: String },

    /// Submit was attempted with nothing to save.
    #[error("no bugs have been moved")]
    NoPendingChanges,
}

impl ErrorCode for TrackerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBug(_) => "E_UNKNOWN_BUG",
            Self::SameList { .. } => "E_SAME_LIST",
            Self::ListMismatch { .. } => "E_LIST_MISMATCH",
            Self::SeparatorInId { .. } => "E_SEPARATOR_IN_ID",
            Self::NoPendingChanges => "E_NO_PENDING_CHANGES",
        }
    }

    /// Only an empty submit can succeed later, once the user moves a bug.
    fn retryable(&self) -> bool {
        matches!(self, Self::NoPendingChanges)
    }
}
