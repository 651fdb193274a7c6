//! Host event dispatch.
//!
//! DESIGN
//! ======
//! The page forwards every user event here together with the tracker it
//! owns. Each event maps to exactly one [`HostEffect`] describing what the
//! page must do next; the page never inspects tracker internals.
//!
//! ERROR HANDLING
//! ==============
//! Tracker errors become [`HostEffect::Rejected`] (bad move, or an id that
//! cannot be encoded in the hidden fields) or [`HostEffect::BlockSubmit`]
//! (empty save). None of them mutates state, so the user can keep moving
//! bugs and retry.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::{ErrorCode, TrackerError};
use crate::net::types::{BugId, HostEvent, ListKind};
use crate::state::sprint_bugs::SprintBugTracker;
use crate::util::sprint_form::{HiddenField, hidden_fields};
use crate::util::toggle_control::ToggleControl;

/// Row that just changed tables, with its refreshed toggle button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MovedRow {
    pub bug_id: BugId,
    pub list: ListKind,
    pub control: ToggleControl,
}

/// Values the page re-renders after a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderState {
    /// Shown in the "current points" label.
    pub sprint_points: u64,
    pub backlog_points: u64,
    pub pending: bool,
    /// Empty tables show their empty-state message.
    pub sprint_empty: bool,
    pub backlog_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved: Option<MovedRow>,
}

/// What the page must do in response to one event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum HostEffect {
    /// Refresh labels, totals and the moved row.
    Render(RenderState),
    /// Event ignored; state unchanged.
    Rejected { code: &'static str, message: String },
    /// Write the hidden fields and let the form submit.
    Submit { fields: Vec<HiddenField> },
    /// Prevent the submit and show the form-level error.
    BlockSubmit { message: String },
    /// Ask the browser to confirm leaving the page.
    ConfirmUnload { message: String },
    /// Nothing to do; let the default action continue.
    Proceed,
}

/// Apply one host event to the tracker.
pub fn dispatch(tracker: &mut SprintBugTracker, config: &PlannerConfig, event: HostEvent) -> HostEffect {
    match event {
        HostEvent::Move { bug_id, from, to } => match tracker.move_bug(&bug_id, from, to) {
            Ok(()) => {
                let moved = MovedRow { bug_id, list: to, control: ToggleControl::for_list(to) };
                HostEffect::Render(render_state(tracker, Some(moved)))
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "move rejected");
                HostEffect::Rejected { code: err.error_code(), message: err.to_string() }
            }
        },
        HostEvent::Submit => submit(tracker, config),
        HostEvent::Unload => match unload_warning(tracker, config) {
            Some(message) => HostEffect::ConfirmUnload { message: message.to_owned() },
            None => HostEffect::Proceed,
        },
        HostEvent::Saved => {
            tracker.mark_saved();
            HostEffect::Render(render_state(tracker, None))
        }
    }
}

/// Current render values, optionally carrying the row that just moved.
#[must_use]
pub fn render_state(tracker: &SprintBugTracker, moved: Option<MovedRow>) -> RenderState {
    RenderState {
        sprint_points: tracker.points_total(ListKind::Sprint),
        backlog_points: tracker.points_total(ListKind::Backlog),
        pending: tracker.has_pending_changes(),
        sprint_empty: tracker.is_list_empty(ListKind::Sprint),
        backlog_empty: tracker.is_list_empty(ListKind::Backlog),
        moved,
    }
}

/// Confirmation text for the unload prompt, if there are unsaved moves.
#[must_use]
pub fn unload_warning<'a>(tracker: &SprintBugTracker, config: &'a PlannerConfig) -> Option<&'a str> {
    tracker.has_pending_changes().then_some(config.unload_message.as_str())
}

fn submit(tracker: &SprintBugTracker, config: &PlannerConfig) -> HostEffect {
    match tracker.serialize_for_submit() {
        Ok(submission) => match hidden_fields(&submission, &config.id_separator) {
            Ok(fields) => {
                tracing::info!(
                    add = submission.add.len(),
                    remove = submission.remove.len(),
                    "sprint form submitted"
                );
                HostEffect::Submit { fields }
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "sprint form submit rejected");
                HostEffect::Rejected { code: err.error_code(), message: err.to_string() }
            }
        },
        Err(TrackerError::NoPendingChanges) => {
            tracing::debug!("empty sprint save blocked");
            HostEffect::BlockSubmit { message: config.form_error_message.clone() }
        }
        Err(err) => HostEffect::Rejected { code: err.error_code(), message: err.to_string() },
    }
}
