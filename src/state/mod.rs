//! Client-side planning state.
//!
//! DESIGN
//! ======
//! State is a plain value owned by the host and passed by reference to the
//! event handlers; nothing here is global.

pub mod sprint_bugs;
