use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod documents;
mod help;

pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let enable_cors = state.config.server.enable_cors;

    let mut router = Router::new()
        .route("/help/languages", get(help::languages))
        .route("/help/{language}/{word}", get(help::ask))
        .route("/grid/load", get(documents::grid_load))
        .route("/grid/save", post(documents::grid_save))
        .route("/dictionary/load", get(documents::dictionary_load))
        .route("/dictionary/save", post(documents::dictionary_save))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state);

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
