//! Age-banded learning levels.

#[cfg(test)]
#[path = "level_test.rs"]
mod level_test;

use std::fmt;

/// Color used when a grade or level cannot be resolved.
pub const NEUTRAL_COLOR: &str = "#6B7280";

/// Utility class paired with [`NEUTRAL_COLOR`].
pub const NEUTRAL_COLOR_CLASS: &str = "level-badge--neutral";

/// One of the four learning levels a grade belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Pre-primary through 2nd EGB (ages 3-7).
    Exploradores,
    /// 3rd through 7th EGB (ages 7-12).
    Constructores,
    /// 8th through 10th EGB (ages 12-15).
    Inventores,
    /// 1st through 3rd Bachillerato (ages 15-18).
    Ingenieros,
}

impl Level {
    pub const ALL: [Self; 4] = [Self::Exploradores, Self::Constructores, Self::Inventores, Self::Ingenieros];

    /// Display name, also used as the backend `nivel` filter value.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exploradores => "Exploradores",
            Self::Constructores => "Constructores",
            Self::Inventores => "Inventores",
            Self::Ingenieros => "Ingenieros",
        }
    }

    /// Brand color as `#RRGGBB`.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Exploradores => "#10B981",
            Self::Constructores => "#3B82F6",
            Self::Inventores => "#8B5CF6",
            Self::Ingenieros => "#EF4444",
        }
    }

    /// Badge modifier class matching [`Level::color`].
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Exploradores => "level-badge--green",
            Self::Constructores => "level-badge--blue",
            Self::Inventores => "level-badge--purple",
            Self::Ingenieros => "level-badge--red",
        }
    }

    /// Resolve a level from its display name, ignoring case and padding.
    pub fn from_name(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|level| level.name().eq_ignore_ascii_case(trimmed))
    }

    /// Resolve a level from its brand color, ignoring case and padding.
    ///
    /// Backend level rows carry only a hex color, so cards use this to pick
    /// their badge class.
    pub fn from_color(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|level| level.color().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
