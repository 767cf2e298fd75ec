//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and catalog/course tiles while reading shared
//! state from Leptos context providers.

pub mod course_card;
pub mod error_banner;
pub mod grade_tile;
pub mod level_card;
pub mod site_footer;
pub mod site_header;
pub mod stats_section;
