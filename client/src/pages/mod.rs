//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, guarded
//! navigation) and delegates rendering details to `components`.

pub mod dashboard;
pub mod grades;
pub mod home;
pub mod login;
