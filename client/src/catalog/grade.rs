//! School grades and their display metadata.

#[cfg(test)]
#[path = "grade_test.rs"]
mod grade_test;

use super::level::Level;

/// A single school year, from pre-primary through upper secondary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grade {
    Inicial1,
    Inicial2,
    Egb1,
    Egb2,
    Egb3,
    Egb4,
    Egb5,
    Egb6,
    Egb7,
    Egb8,
    Egb9,
    Egb10,
    Bachillerato1,
    Bachillerato2,
    Bachillerato3,
}

impl Grade {
    /// Every grade in display order.
    pub const ALL: [Self; 15] = [
        Self::Inicial1,
        Self::Inicial2,
        Self::Egb1,
        Self::Egb2,
        Self::Egb3,
        Self::Egb4,
        Self::Egb5,
        Self::Egb6,
        Self::Egb7,
        Self::Egb8,
        Self::Egb9,
        Self::Egb10,
        Self::Bachillerato1,
        Self::Bachillerato2,
        Self::Bachillerato3,
    ];

    /// Stable identifier used in URLs and backend payloads.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Inicial1 => "inicial-1",
            Self::Inicial2 => "inicial-2",
            Self::Egb1 => "1-egb",
            Self::Egb2 => "2-egb",
            Self::Egb3 => "3-egb",
            Self::Egb4 => "4-egb",
            Self::Egb5 => "5-egb",
            Self::Egb6 => "6-egb",
            Self::Egb7 => "7-egb",
            Self::Egb8 => "8-egb",
            Self::Egb9 => "9-egb",
            Self::Egb10 => "10-egb",
            Self::Bachillerato1 => "1-bachillerato",
            Self::Bachillerato2 => "2-bachillerato",
            Self::Bachillerato3 => "3-bachillerato",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inicial1 => "Inicial 1",
            Self::Inicial2 => "Inicial 2",
            Self::Egb1 => "1.° de EGB",
            Self::Egb2 => "2.° de EGB",
            Self::Egb3 => "3.° de EGB",
            Self::Egb4 => "4.° de EGB",
            Self::Egb5 => "5.° de EGB",
            Self::Egb6 => "6.° de EGB",
            Self::Egb7 => "7.° de EGB",
            Self::Egb8 => "8.° de EGB",
            Self::Egb9 => "9.° de EGB",
            Self::Egb10 => "10.° de EGB",
            Self::Bachillerato1 => "1.° de Bachillerato",
            Self::Bachillerato2 => "2.° de Bachillerato",
            Self::Bachillerato3 => "3.° de Bachillerato",
        }
    }

    pub const fn age_range(self) -> &'static str {
        match self {
            Self::Inicial1 => "3-4 años",
            Self::Inicial2 => "4-5 años",
            Self::Egb1 => "5-6 años",
            Self::Egb2 => "6-7 años",
            Self::Egb3 => "7-8 años",
            Self::Egb4 => "8-9 años",
            Self::Egb5 => "9-10 años",
            Self::Egb6 => "10-11 años",
            Self::Egb7 => "11-12 años",
            Self::Egb8 => "12-13 años",
            Self::Egb9 => "13-14 años",
            Self::Egb10 => "14-15 años",
            Self::Bachillerato1 => "15-16 años",
            Self::Bachillerato2 => "16-17 años",
            Self::Bachillerato3 => "17-18 años",
        }
    }

    pub const fn level(self) -> Level {
        match self {
            Self::Inicial1 | Self::Inicial2 | Self::Egb1 | Self::Egb2 => Level::Exploradores,
            Self::Egb3 | Self::Egb4 | Self::Egb5 | Self::Egb6 | Self::Egb7 => Level::Constructores,
            Self::Egb8 | Self::Egb9 | Self::Egb10 => Level::Inventores,
            Self::Bachillerato1 | Self::Bachillerato2 | Self::Bachillerato3 => Level::Ingenieros,
        }
    }

    /// Resolve a grade from its identifier. Matching is exact.
    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.id() == raw)
    }

    pub const fn entry(self) -> GradeEntry {
        let level = self.level();
        GradeEntry {
            grade: self,
            id: self.id(),
            label: self.label(),
            level,
            level_name: level.name(),
            age_range: self.age_range(),
            color: level.color(),
        }
    }
}

/// Display metadata for one grade, flattened for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradeEntry {
    pub grade: Grade,
    pub id: &'static str,
    pub label: &'static str,
    pub level: Level,
    pub level_name: &'static str,
    pub age_range: &'static str,
    /// Level color as `#RRGGBB`.
    pub color: &'static str,
}

/// Look up catalog metadata for a raw grade id.
pub fn lookup(grade_id: &str) -> Option<GradeEntry> {
    Grade::from_id(grade_id).map(Grade::entry)
}

/// Every catalog entry in display order.
pub fn all() -> impl Iterator<Item = GradeEntry> {
    Grade::ALL.into_iter().map(Grade::entry)
}

/// Short uppercase badge text for a grade id, e.g. `"3-egb"` -> `"3 EGB"`.
///
/// Only the first hyphen becomes a space. Unknown ids are formatted the same
/// way so a bad URL still renders something readable.
pub fn display_code(grade_id: &str) -> String {
    grade_id.replacen('-', " ", 1).to_uppercase()
}

/// First character of `text`, uppercased, for avatar badges.
pub fn initial(text: &str) -> String {
    text.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
