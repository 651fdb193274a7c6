//! Utility helpers shared by the tracker and the host adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form encoding and control presentation are kept out of the tracker so the
//! state model stays free of markup concerns.

pub mod sprint_form;
pub mod toggle_control;
