//! Toggle-button presentation per list.
//!
//! Each bug row carries one button that moves it to the other table. Its
//! label and color depend only on the table the row currently sits in.

#[cfg(test)]
#[path = "toggle_control_test.rs"]
mod toggle_control_test;

use serde::Serialize;

use crate::net::types::ListKind;

/// CSS classes swapped on every toggle; the host removes both before adding
/// the current one.
pub const TOGGLE_COLOR_CLASSES: [&str; 2] = ["btn-danger", "btn-success"];

/// Label and color hint for a row's toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub title: &'static str,
    pub color: &'static str,
}

impl ToggleControl {
    /// Control for a row currently in `list`.
    #[must_use]
    pub fn for_list(list: ListKind) -> Self {
        match list {
            ListKind::Sprint => Self { title: "Remove from sprint", color: "btn-danger" },
            ListKind::Backlog => Self { title: "Add to sprint", color: "btn-success" },
        }
    }
}
