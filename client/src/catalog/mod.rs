//! Static school-grade catalog.
//!
//! DESIGN
//! ======
//! Grades and levels are closed enums so every lookup, color, and label is an
//! exhaustive `match` checked at compile time. Raw grade ids only enter the
//! system through URLs and backend payloads; `lookup` is the single place
//! where they are resolved, and an unknown id resolves to `None` rather than
//! a panic.

pub mod grade;
pub mod level;

pub use grade::{Grade, GradeEntry, all, display_code, initial, lookup};
pub use level::{Level, NEUTRAL_COLOR, NEUTRAL_COLOR_CLASS};
