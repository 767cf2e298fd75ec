//! Backend wire DTOs.
//!
//! DESIGN
//! ======
//! Field names follow the backend's Spanish JSON keys through `serde(rename)`
//! while the Rust side uses English names. The backend is not typed: numbers
//! may arrive as integral floats or numeric strings, and an unusable number
//! decodes as absent. List fields drop malformed rows instead of failing the
//! whole reply.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{self, GradeEntry, Level};

/// An authenticated student as returned by the login and registration endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Given name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Family name(s).
    #[serde(rename = "apellidos", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Grade id; expected to be a catalog key but not guaranteed.
    #[serde(rename = "grado", default)]
    pub grade: String,
    /// Institution display name, when the student is enrolled through one.
    #[serde(rename = "institucion", default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl User {
    /// Catalog metadata for the user's grade, or `None` for unknown grades.
    pub fn grade_entry(&self) -> Option<GradeEntry> {
        catalog::lookup(&self.grade)
    }

    pub fn level(&self) -> Option<Level> {
        self.grade_entry().map(|entry| entry.level)
    }
}

/// A course row from `/api/cursos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// A level row from `/api/niveles`, shown as a card on the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "edad_minima", default, deserialize_with = "deserialize_optional_u32")]
    pub min_age: Option<u32>,
    #[serde(rename = "edad_maxima", default, deserialize_with = "deserialize_optional_u32")]
    pub max_age: Option<u32>,
    /// Brand color as `#RRGGBB`.
    #[serde(default)]
    pub color: Option<String>,
    /// Emoji or short glyph.
    #[serde(rename = "icono", default)]
    pub icon: Option<String>,
}

impl LevelSummary {
    /// Resolve the catalog level by name first, then by color.
    pub fn level(&self) -> Option<Level> {
        Level::from_name(&self.name).or_else(|| self.color.as_deref().and_then(Level::from_color))
    }

    pub fn color_class(&self) -> &'static str {
        self.level().map_or(catalog::NEUTRAL_COLOR_CLASS, Level::color_class)
    }

    /// `"3 - 7 años"` when both bounds are known.
    pub fn age_label(&self) -> Option<String> {
        match (self.min_age, self.max_age) {
            (Some(min), Some(max)) => Some(format!("{min} - {max} años")),
            _ => None,
        }
    }
}

/// `GET /api/health`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// `GET /api/niveles`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LevelCatalogResponse {
    #[serde(rename = "niveles", default, deserialize_with = "deserialize_rows")]
    pub levels: Vec<LevelSummary>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub count: Option<u64>,
}

impl LevelCatalogResponse {
    /// Backend-reported count, falling back to the number of rows.
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.levels.len() as u64)
    }
}

/// `GET /api/instituciones`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InstitutionCatalogResponse {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub count: Option<u64>,
}

impl InstitutionCatalogResponse {
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(0)
    }
}

/// `GET /api/cursos?nivel=<level>`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CourseListResponse {
    #[serde(rename = "cursos", default, deserialize_with = "deserialize_rows")]
    pub courses: Vec<Course>,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/registro-estudiante` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "codigo_institucion")]
    pub institution_code: String,
    #[serde(rename = "grado")]
    pub grade: String,
}

/// Response shared by login and registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_id(deserializer)?.ok_or_else(|| D::Error::custom("expected string or number id"))
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

/// Decode a list row by row, skipping rows that do not match `T`.
fn deserialize_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let rows = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                leptos::logging::warn!("skipping malformed row: {e}");
                None
            }
        })
        .collect())
}

fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_optional_u64(deserializer)? {
        Some(value) => Ok(match u32::try_from(value) {
            Ok(small) => Some(small),
            Err(_) => None,
        }),
        None => Ok(None),
    }
}

fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_u64(&serde_json::Value::deserialize(deserializer)?))
}

/// Non-negative integer from a JSON number or numeric string.
fn lenient_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(number) => number.as_u64().or_else(|| number.as_f64().and_then(integral_u64)),
        serde_json::Value::String(text) => {
            let text = text.trim();
            match text.parse::<u64>() {
                Ok(int) => Some(int),
                Err(_) => text.parse::<f64>().map_or(None, integral_u64),
            }
        }
        _ => None,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn integral_u64(float: f64) -> Option<u64> {
    (float.is_finite() && float.fract() == 0.0 && float >= 0.0 && float <= u64::MAX as f64).then(|| float as u64)
}
