//! Hidden sprint-form fields.
//!
//! The sprint form posts pending actions as one delimited id list per action
//! kind. Empty kinds are omitted so the server only sees what changed.

#[cfg(test)]
#[path = "sprint_form_test.rs"]
mod sprint_form_test;

use serde::Serialize;

use crate::error::TrackerError;
use crate::net::types::BugId;
use crate::state::sprint_bugs::{BugAction, SprintSubmission};

/// Default delimiter between ids in a hidden field.
pub const DEFAULT_ID_SEPARATOR: &str = ",";

/// Prefix the page puts in front of a form field name to build its DOM id.
pub const FIELD_ID_PREFIX: &str = "id_";

/// One hidden input to populate before the form is submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    /// Form field name, e.g. `add_bugs`.
    pub name: &'static str,
    /// Delimited bug ids.
    pub value: String,
}

impl HiddenField {
    /// DOM id of the input element (`id_add_bugs`).
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{FIELD_ID_PREFIX}{}", self.name)
    }
}

/// Form field name for an action kind.
#[must_use]
pub fn field_name(action: BugAction) -> &'static str {
    match action {
        BugAction::Add => "add_bugs",
        BugAction::Remove => "remove_bugs",
    }
}

/// Join ids in order with `separator`.
#[must_use]
pub fn join_ids(ids: &[BugId], separator: &str) -> String {
    ids.iter().map(BugId::as_str).collect::<Vec<_>>().join(separator)
}

/// Parse a hidden field value back into ids, dropping empty segments.
#[must_use]
pub fn split_ids(raw: &str, separator: &str) -> Vec<BugId> {
    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(BugId::from)
        .collect()
}

/// Hidden fields for a submission: one per non-empty action kind, add first.
///
/// # Errors
///
/// Returns [`TrackerError::SeparatorInId`] when an id contains `separator`,
/// since the server would split it into several ids.
pub fn hidden_fields(submission: &SprintSubmission, separator: &str) -> Result<Vec<HiddenField>, TrackerError> {
    let mut fields = Vec::new();
    for action in [BugAction::Add, BugAction::Remove] {
        let ids = submission.ids(action);
        if ids.is_empty() {
            continue;
        }
        if let Some(bug_id) = ids.iter().find(|id| id.as_str().contains(separator)) {
            return Err(TrackerError::SeparatorInId { bug_id: bug_id.clone(), separator: separator.to_owned() });
        }
        fields.push(HiddenField { name: field_name(action), value: join_ids(ids, separator) });
    }
    Ok(fields)
}
