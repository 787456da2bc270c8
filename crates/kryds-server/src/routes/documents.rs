use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::state::AppState;

fn failure(msg: String) -> Response {
    tracing::error!("{}", msg);
    (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
}

pub async fn grid_load(State(state): State<Arc<AppState>>) -> Response {
    match state.storage.load_grid().await {
        Ok(grid) => Json(grid).into_response(),
        Err(e) => failure(format!("Failed to load grid: {e}")),
    }
}

pub async fn grid_save(State(state): State<Arc<AppState>>, Json(grid): Json<Value>) -> Response {
    match state.storage.save_grid(&grid).await {
        Ok(()) => {
            let msg = format!("Saved {}!", state.storage.grid_path().display());
            tracing::info!("{}", msg);
            (StatusCode::OK, msg).into_response()
        }
        Err(e) => failure(format!("Failed to save grid: {e}")),
    }
}

pub async fn dictionary_load(State(state): State<Arc<AppState>>) -> Response {
    match state.storage.load_dictionary().await {
        Ok(dictionary) => Json(dictionary).into_response(),
        Err(e) => failure(format!("Error loading dictionary file: {e}")),
    }
}

pub async fn dictionary_save(
    State(state): State<Arc<AppState>>,
    Json(dictionary): Json<Value>,
) -> Response {
    match state.storage.save_dictionary(&dictionary).await {
        Ok(()) => {
            tracing::info!("Saved {}", state.storage.dictionary_path().display());
            (StatusCode::OK, "Dictionary saved!").into_response()
        }
        Err(e) => failure(format!("Error saving dictionary file: {e}")),
    }
}
