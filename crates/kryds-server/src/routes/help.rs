use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

/// `GET /help/{language}/{word}`: JSON array of candidates, or 500 with the reason
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Path((language, word)): Path<(String, String)>,
) -> Response {
    let span = tracing::info_span!("help", request_id = %Uuid::new_v4(), %language);

    async move {
        tracing::info!("Fetching word: {}", word);

        match state.service.ask(&language, &word).await {
            Ok(words) => {
                tracing::debug!("{} candidates for '{}'", words.len(), word);
                (StatusCode::OK, Json(words)).into_response()
            }
            Err(e) => {
                let msg = format!("Failed to fetch word: {e}");
                tracing::warn!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// `GET /help/languages`
pub async fn languages(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.service.languages())
}
