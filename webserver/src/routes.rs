//! The two contracted collection endpoints

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::state::AppState;
use shared::Restaurant;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/restaurants-collection",
            get(get_collection).post(replace_collection),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full collection as a JSON array.
async fn get_collection(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, StatusCode> {
    let collection = state.read_collection().await.map_err(|e| {
        warn!("failed to read data file: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(collection))
}

/// Full-replace write: the body supersedes any prior stored state.
/// A malformed body is rejected by the extractor before this runs.
async fn replace_collection(
    State(state): State<AppState>,
    Json(collection): Json<Vec<Restaurant>>,
) -> Result<Json<Value>, StatusCode> {
    state.write_collection(&collection).await.map_err(|e| {
        warn!("failed to write data file: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    info!(count = collection.len(), "collection replaced");
    Ok(Json(json!({"status": "success"})))
}
