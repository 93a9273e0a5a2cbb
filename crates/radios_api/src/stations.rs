use axum::{Json, extract::State};
use radios_core::Directory;
use std::sync::Arc;

/// Serve the station directory in the exact shape the frontend fetches,
/// `{ "radios": [ ... ] }`.
pub async fn get_stations(State(directory): State<Arc<Directory>>) -> Json<Directory> {
    tracing::info!("serving station directory");
    Json(directory.as_ref().clone())
}
