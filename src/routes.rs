//! Router assembly.
//!
//! Binds the Leptos SSR app, its compiled `/pkg` assets, and a health check
//! under a single Axum router. The backend API is remote; nothing here
//! proxies it.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Directory holding the compiled client bundle.
fn asset_root(config: &ServerConfig, leptos_site_root: &str) -> PathBuf {
    config
        .site_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_site_root))
}

fn pkg_dir(site_root: &Path) -> PathBuf {
    site_root.join("pkg")
}

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = asset_root(config, leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root.display(), "serving client assets");

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir(&site_root)))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
