//! REST helpers for the remote education backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Connectivity`] since
//! the backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single attempt. Non-2xx replies are mapped to
//! [`ApiError::Validation`] when the body carries an `error` field, and to
//! [`ApiError::Connectivity`] otherwise, so views can always render a message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AuthResponse, Course, CourseListResponse, HealthResponse, InstitutionCatalogResponse, LevelCatalogResponse,
    LoginRequest, RegisterRequest, User,
};
use crate::catalog::Level;

/// Production backend address.
pub const DEFAULT_API_BASE_URL: &str = "https://plataforma-educativa-backend-production.up.railway.app";

const HEALTH_PATH: &str = "/api/health";
const LEVELS_PATH: &str = "/api/niveles";
const INSTITUTIONS_PATH: &str = "/api/instituciones";
const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/registro-estudiante";

/// Backend base address, overridable at build time with `CHASKI_API_BASE_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("CHASKI_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn courses_path(level: Level) -> String {
    format!("/api/cursos?nivel={}", level.name())
}

/// Map a non-2xx reply to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_response(status: u16, body: &str) -> ApiError {
    let err = ApiError::from_error_body(body);
    if err == ApiError::Connectivity {
        leptos::logging::warn!("backend replied {status} without an error message");
    }
    err
}

/// Turn a 2xx auth reply into the authenticated user.
fn user_from_auth_response(response: AuthResponse) -> Result<User, ApiError> {
    match response {
        AuthResponse { success: true, user: Some(user), .. } => Ok(user),
        AuthResponse { error: Some(message), .. } => Err(ApiError::from_message(message)),
        _ => Err(ApiError::Connectivity),
    }
}

/// `GET /api/health`
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or rejects the call.
pub async fn fetch_health() -> Result<HealthResponse, ApiError> {
    get_json(HEALTH_PATH).await
}

/// `GET /api/niveles`
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or rejects the call.
pub async fn fetch_levels() -> Result<LevelCatalogResponse, ApiError> {
    get_json(LEVELS_PATH).await
}

/// `GET /api/instituciones`
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or rejects the call.
pub async fn fetch_institutions() -> Result<InstitutionCatalogResponse, ApiError> {
    get_json(INSTITUTIONS_PATH).await
}

/// List courses for one level.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend is unreachable or rejects the call.
pub async fn fetch_courses(level: Level) -> Result<Vec<Course>, ApiError> {
    let body: CourseListResponse = get_json(&courses_path(level)).await?;
    Ok(body.courses)
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for rejected credentials and
/// [`ApiError::Connectivity`] for transport failures.
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    let body: AuthResponse = post_json(LOGIN_PATH, request).await?;
    user_from_auth_response(body)
}

/// Register a student account under an institution code.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for rejected registrations (duplicate
/// email, unknown institution code) and [`ApiError::Connectivity`] for
/// transport failures.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    let body: AuthResponse = post_json(REGISTER_PATH, request).await?;
    user_from_auth_response(body)
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), path);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| {
            leptos::logging::warn!("GET {url} failed: {e}");
            ApiError::Connectivity
        })?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Connectivity)
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), path);
        let resp = gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| {
                leptos::logging::warn!("POST {url} body encoding failed: {e}");
                ApiError::Connectivity
            })?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::warn!("POST {url} failed: {e}");
                ApiError::Connectivity
            })?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Connectivity)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !(200..300).contains(&resp.status()) {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(failure_from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| {
        leptos::logging::warn!("unreadable backend reply: {e}");
        ApiError::Connectivity
    })
}
