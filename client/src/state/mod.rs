//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`home`, `courses`) plus the app-wide `session`, so
//! each page depends on a small focused model. Plain structs hold the
//! transitions; pages wrap them in signals.

pub mod courses;
pub mod home;
pub mod session;
