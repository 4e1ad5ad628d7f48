//! Core traits and the shared bounds-checking policy.

pub mod bounds;
pub mod traits;
