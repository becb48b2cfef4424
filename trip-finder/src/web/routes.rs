//! HTTP route handlers for the results server.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;

use super::state::AppState;
use super::templates::{TripView, TripsTemplate};
use crate::output::TripRecord;

/// Create the application router.
///
/// `files_dir` is the output directory of the run; it is served verbatim
/// under `/files` so the raw `trips.jsonl` can be downloaded.
pub fn create_router(state: AppState, files_dir: &Path) -> Router {
    Router::new()
        .route("/", get(trips_page))
        .route("/health", get(health))
        .route("/api/trips", get(list_trips))
        .nest_service("/files", ServeDir::new(files_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Results table page.
async fn trips_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = TripsTemplate {
        origin: state.origin.clone(),
        trips: state.trips.iter().map(TripView::from_record).collect(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All trips as JSON.
async fn list_trips(State(state): State<AppState>) -> Json<Vec<TripRecord>> {
    Json(state.trips.as_ref().clone())
}
