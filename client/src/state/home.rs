//! Landing-page statistics derived from the three catalog reads.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::net::error::ApiError;
use crate::net::types::{HealthResponse, InstitutionCatalogResponse, LevelCatalogResponse, LevelSummary};

/// Inline message shown when any landing-page read fails.
pub const HOME_ERROR_MESSAGE: &str = "Error conectando con la API";

/// Courses offered per level; the advertised course count is derived from
/// the level count with this factor.
pub const COURSES_PER_LEVEL: u64 = 3;

/// Backend health as shown in the stats strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Loading,
    Ok,
    Error,
}

impl ApiStatus {
    /// Interpret the `status` field of `/api/health`. Anything but `OK` is an error.
    pub fn from_health(status: &str) -> Self {
        if status.trim().eq_ignore_ascii_case("ok") { Self::Ok } else { Self::Error }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Loading...",
            Self::Ok => "OK",
            Self::Error => "ERROR",
        }
    }

    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Loading => "…",
            Self::Ok => "✅",
            Self::Error => "❌",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformStats {
    pub level_count: u64,
    pub institution_count: u64,
    pub course_count: u64,
    pub api_status: ApiStatus,
}

/// Everything the home page renders from the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    pub stats: PlatformStats,
    pub levels: Vec<LevelSummary>,
    pub error: Option<String>,
}

impl HomeState {
    /// Combine the three parallel reads. Any failure marks the API as down and
    /// leaves counts at zero; partial data is not shown.
    pub fn from_responses(
        health: Result<HealthResponse, ApiError>,
        levels: Result<LevelCatalogResponse, ApiError>,
        institutions: Result<InstitutionCatalogResponse, ApiError>,
    ) -> Self {
        match (health, levels, institutions) {
            (Ok(health), Ok(levels), Ok(institutions)) => {
                let level_count = levels.total();
                Self {
                    stats: PlatformStats {
                        level_count,
                        institution_count: institutions.total(),
                        course_count: level_count.saturating_mul(COURSES_PER_LEVEL),
                        api_status: ApiStatus::from_health(&health.status),
                    },
                    levels: levels.levels,
                    error: None,
                }
            }
            _ => Self::failed(),
        }
    }

    pub fn failed() -> Self {
        Self {
            stats: PlatformStats { api_status: ApiStatus::Error, ..PlatformStats::default() },
            levels: Vec::new(),
            error: Some(HOME_ERROR_MESSAGE.to_owned()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.stats.api_status == ApiStatus::Loading
    }
}
