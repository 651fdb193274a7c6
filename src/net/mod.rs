//! Host boundary DTOs.
//!
//! DESIGN
//! ======
//! The page embeds its initial bug membership as JSON and forwards user
//! events in the same encoding, so everything crossing the boundary lives
//! here with its serde shape.

pub mod types;
