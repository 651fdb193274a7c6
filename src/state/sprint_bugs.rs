//! Sprint bug-reassignment tracker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The planning page shows the sprint table and the backlog table side by
//! side. Each toggle moves one row across, and on submit the page posts only
//! the bugs whose sprint membership differs from what the server rendered.
//!
//! DESIGN
//! ======
//! The baseline (`original_bugs`) is captured once at construction and never
//! read back from the rendered tables. Pending actions are diffed against it
//! on every move:
//! - a move toward the sprint is recorded as `add` unless the bug is already
//!   in the baseline;
//! - a move toward the backlog is recorded as `remove` only if the bug is in
//!   the baseline;
//! - the opposite action for the bug is always dropped.
//!
//! This keeps `add`/`remove` disjoint and equal to the minimal change set
//! that turns the baseline into the current sprint table, so moving a bug
//! away and back leaves the pending actions exactly as they were.

#[cfg(test)]
#[path = "sprint_bugs_test.rs"]
mod sprint_bugs_test;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::TrackerError;
use crate::net::types::{BugId, BugRecord, ListKind, PageSnapshot};
use crate::util::toggle_control::ToggleControl;

/// Kind of pending change for one bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BugAction {
    Add,
    Remove,
}

impl BugAction {
    /// Action implied by moving a bug into `list`.
    #[must_use]
    pub fn toward(list: ListKind) -> Self {
        match list {
            ListKind::Sprint => Self::Add,
            ListKind::Backlog => Self::Remove,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }
}

/// Pending add/remove actions, each kept in the order bugs were recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BugActions {
    add: Vec<BugId>,
    remove: Vec<BugId>,
}

impl BugActions {
    #[must_use]
    pub fn ids(&self, action: BugAction) -> &[BugId] {
        match action {
            BugAction::Add => &self.add,
            BugAction::Remove => &self.remove,
        }
    }

    #[must_use]
    pub fn contains(&self, action: BugAction, bug_id: &BugId) -> bool {
        self.ids(action).contains(bug_id)
    }

    /// True when neither action has ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }

    fn ids_mut(&mut self, action: BugAction) -> &mut Vec<BugId> {
        match action {
            BugAction::Add => &mut self.add,
            BugAction::Remove => &mut self.remove,
        }
    }

    /// Append `bug_id` unless already present. Returns whether it was added.
    fn record(&mut self, action: BugAction, bug_id: &BugId) -> bool {
        let ids = self.ids_mut(action);
        if ids.contains(bug_id) {
            return false;
        }
        ids.push(bug_id.clone());
        true
    }

    /// Drop `bug_id` if present. Returns whether anything was removed.
    fn retract(&mut self, action: BugAction, bug_id: &BugId) -> bool {
        let ids = self.ids_mut(action);
        let before = ids.len();
        ids.retain(|id| id != bug_id);
        ids.len() != before
    }

    fn clear(&mut self) {
        self.add.clear();
        self.remove.clear();
    }
}

/// Serialized pending actions handed to the sprint form on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SprintSubmission {
    pub add: Vec<BugId>,
    pub remove: Vec<BugId>,
}

impl SprintSubmission {
    #[must_use]
    pub fn ids(&self, action: BugAction) -> &[BugId] {
        match action {
            BugAction::Add => &self.add,
            BugAction::Remove => &self.remove,
        }
    }
}

/// Reassignment state for one planning page.
#[derive(Clone, Debug, Default)]
pub struct SprintBugTracker {
    /// Immutable bug metadata keyed by id.
    bugs: HashMap<BugId, BugRecord>,
    /// Bugs on the sprint when the page was rendered (or last saved).
    original_bugs: HashSet<BugId>,
    actions: BugActions,
    /// Current table for every known bug.
    membership: HashMap<BugId, ListKind>,
    /// Sprint table rows in display order.
    sprint_rows: Vec<BugId>,
    /// Backlog table rows in display order.
    backlog_rows: Vec<BugId>,
}

impl SprintBugTracker {
    /// Build a tracker from rendered rows and an explicit baseline.
    ///
    /// A bug starts on the sprint iff its id is in `original_bugs`. Rows whose
    /// rendered table disagrees with the baseline follow the baseline.
    pub fn new(bugs: impl IntoIterator<Item = BugRecord>, original_bugs: impl IntoIterator<Item = BugId>) -> Self {
        let original_bugs: HashSet<BugId> = original_bugs.into_iter().collect();
        let mut tracker = Self { original_bugs, ..Self::default() };

        for record in bugs {
            if tracker.bugs.contains_key(&record.id) {
                tracing::warn!(bug_id = %record.id, "duplicate bug row ignored");
                continue;
            }
            let list = if tracker.original_bugs.contains(&record.id) { ListKind::Sprint } else { ListKind::Backlog };
            if list != record.original_list {
                tracing::warn!(
                    bug_id = %record.id,
                    rendered = %record.original_list,
                    baseline = %list,
                    "bug row rendered outside its baseline list"
                );
            }
            tracker.membership.insert(record.id.clone(), list);
            tracker.rows_mut(list).push(record.id.clone());
            tracker.bugs.insert(record.id.clone(), record);
        }

        for id in &tracker.original_bugs {
            if !tracker.bugs.contains_key(id) {
                tracing::warn!(bug_id = %id, "baseline bug has no rendered row");
            }
        }

        tracing::debug!(
            bugs = tracker.bugs.len(),
            sprint = tracker.sprint_rows.len(),
            backlog = tracker.backlog_rows.len(),
            "sprint bug tracker initialized"
        );
        tracker
    }

    /// Build a tracker whose baseline is every row rendered into the sprint table.
    pub fn from_records(bugs: Vec<BugRecord>) -> Self {
        let original: Vec<BugId> = bugs
            .iter()
            .filter(|record| record.original_list == ListKind::Sprint)
            .map(|record| record.id.clone())
            .collect();
        Self::new(bugs, original)
    }

    /// Build a tracker from the page's embedded snapshot.
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        match snapshot.original_bugs {
            Some(original) => Self::new(snapshot.bugs, original),
            None => Self::from_records(snapshot.bugs),
        }
    }

    /// Move one bug between tables and reconcile the pending actions.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UnknownBug`] for ids outside the snapshot,
    /// [`TrackerError::SameList`] when `from == to`, and
    /// [`TrackerError::ListMismatch`] when the bug is not currently in
    /// `from`. State is unchanged on error.
    pub fn move_bug(&mut self, bug_id: &BugId, from: ListKind, to: ListKind) -> Result<(), TrackerError> {
        let Some(&current) = self.membership.get(bug_id) else {
            return Err(TrackerError::UnknownBug(bug_id.clone()));
        };
        if from == to {
            return Err(TrackerError::SameList { bug_id: bug_id.clone(), list: to });
        }
        if current != from {
            return Err(TrackerError::ListMismatch { bug_id: bug_id.clone(), reported: from, actual: current });
        }

        let action = BugAction::toward(to);
        let in_baseline = self.original_bugs.contains(bug_id);
        let changes_baseline = match action {
            BugAction::Add => !in_baseline,
            BugAction::Remove => in_baseline,
        };
        let recorded = changes_baseline && self.actions.record(action, bug_id);
        let retracted = self.actions.retract(action.other(), bug_id);

        self.rows_mut(from).retain(|id| id != bug_id);
        self.rows_mut(to).push(bug_id.clone());
        self.membership.insert(bug_id.clone(), to);

        tracing::debug!(
            bug_id = %bug_id,
            %from,
            %to,
            recorded,
            retracted,
            pending = self.has_pending_changes(),
            "bug moved"
        );
        Ok(())
    }

    /// Sum of story points for bugs currently in `list`; zero when empty.
    #[must_use]
    pub fn points_total(&self, list: ListKind) -> u64 {
        self.rows(list)
            .iter()
            .filter_map(|id| self.bugs.get(id))
            .map(|record| u64::from(record.points))
            .sum()
    }

    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        !self.actions.is_empty()
    }

    #[must_use]
    pub fn actions(&self) -> &BugActions {
        &self.actions
    }

    /// Pending actions in recording order, for the sprint form.
    ///
    /// Actions are not cleared here; call [`Self::mark_saved`] once the
    /// server has accepted the submission.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NoPendingChanges`] when nothing was moved.
    pub fn serialize_for_submit(&self) -> Result<SprintSubmission, TrackerError> {
        if !self.has_pending_changes() {
            return Err(TrackerError::NoPendingChanges);
        }
        Ok(SprintSubmission { add: self.actions.add.clone(), remove: self.actions.remove.clone() })
    }

    /// Fold the pending actions into the baseline after a successful save.
    pub fn mark_saved(&mut self) {
        for id in &self.actions.remove {
            self.original_bugs.remove(id);
        }
        self.original_bugs.extend(self.actions.add.iter().cloned());
        tracing::info!(
            added = self.actions.add.len(),
            removed = self.actions.remove.len(),
            "sprint changes saved"
        );
        self.actions.clear();
    }

    /// Toggle-button hint for a bug's current table.
    #[must_use]
    pub fn toggle_control(&self, bug_id: &BugId) -> Option<ToggleControl> {
        self.current_list(bug_id).map(ToggleControl::for_list)
    }

    #[must_use]
    pub fn current_list(&self, bug_id: &BugId) -> Option<ListKind> {
        self.membership.get(bug_id).copied()
    }

    /// Rows of `list` in display order.
    #[must_use]
    pub fn rows(&self, list: ListKind) -> &[BugId] {
        match list {
            ListKind::Sprint => &self.sprint_rows,
            ListKind::Backlog => &self.backlog_rows,
        }
    }

    /// True when `list` has no rows and the page should show its empty message.
    #[must_use]
    pub fn is_list_empty(&self, list: ListKind) -> bool {
        self.rows(list).is_empty()
    }

    #[must_use]
    pub fn bug(&self, bug_id: &BugId) -> Option<&BugRecord> {
        self.bugs.get(bug_id)
    }

    /// True when the bug was on the sprint at the baseline.
    #[must_use]
    pub fn is_original(&self, bug_id: &BugId) -> bool {
        self.original_bugs.contains(bug_id)
    }

    fn rows_mut(&mut self, list: ListKind) -> &mut Vec<BugId> {
        match list {
            ListKind::Sprint => &mut self.sprint_rows,
            ListKind::Backlog => &mut self.backlog_rows,
        }
    }
}
