//! Sprint planning interaction core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page renders two bug tables (sprint and backlog) and forwards
//! user events here. This crate owns the pending add/remove actions, the
//! baseline the actions are diffed against, and the derived values the page
//! displays. Rendering, HTTP submission and CSRF handling stay in the host.

pub mod config;
pub mod error;
pub mod host;
pub mod net;
pub mod state;
pub mod util;
