//! Radios de España — development server HTTP layer
//!
//! Serves the static asset tree under the `/radios` base path and exposes
//! the station directory as a JSON endpoint, mirroring what a static
//! deployment gets from the generated `radios.json`.

mod stations;

use axum::{Router, response::Redirect, routing::get};
use radios_core::Directory;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Path prefix the whole site lives under, in dev and in production.
pub const BASE_PATH: &str = "/radios";

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

async fn root_redirect() -> Redirect {
    Redirect::temporary("/radios/")
}

/// Create the application router: the station API plus the static asset
/// tree, both nested under [`BASE_PATH`]. Requests outside the base path
/// (except `/` and `/health`) are 404s.
pub fn create_app(directory: Directory, assets_dir: &Path) -> Router {
    let shared_directory = Arc::new(directory);

    let site = Router::new()
        .route("/api/radios", get(stations::get_stations))
        .fallback_service(ServeDir::new(assets_dir).append_index_html_on_directories(true))
        .with_state(shared_directory);

    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health_check))
        .nest(BASE_PATH, site)
        .layer(TraceLayer::new_for_http())
}
