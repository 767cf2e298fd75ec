//! Course list state for the dashboard.
//!
//! DESIGN
//! ======
//! Courses are fetched per dashboard render and never cached beyond it. A
//! failed fetch degrades to the empty state instead of an error banner.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::catalog::Level;
use crate::net::error::ApiError;
use crate::net::types::Course;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoursesState {
    /// Level the current list (or in-flight request) belongs to.
    pub level: Option<Level>,
    pub items: Vec<Course>,
    pub loading: bool,
}

impl Default for CoursesState {
    fn default() -> Self {
        Self { level: None, items: Vec::new(), loading: true }
    }
}

impl CoursesState {
    /// Whether a fetch for `level` is needed.
    pub fn needs_fetch(&self, level: Level) -> bool {
        self.level != Some(level)
    }

    pub fn begin(&mut self, level: Level) {
        self.level = Some(level);
        self.items.clear();
        self.loading = true;
    }

    /// Apply a fetch result. Results for a level other than the current one
    /// are dropped.
    pub fn finish(&mut self, level: Level, result: Result<Vec<Course>, ApiError>) {
        if self.level != Some(level) {
            return;
        }
        self.items = result.unwrap_or_default();
        self.loading = false;
    }

    /// Nothing to fetch (unknown grade): show the empty state.
    pub fn unavailable(&mut self) {
        self.level = None;
        self.items.clear();
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}
