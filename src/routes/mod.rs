//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the catalog's REST endpoints under a single Axum router
//! with permissive CORS and per-request trace spans.

pub mod consoles;
pub mod games;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full HTTP router for the catalog.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/consoles", get(consoles::list_consoles).post(consoles::create_console))
        .route("/consoles/{id}", get(consoles::get_console))
        .route("/games", get(games::list_games).post(games::create_game))
        .route("/games/{id}", get(games::get_game))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
