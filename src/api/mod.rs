//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/film/:film_id", get(handlers::film))
        .route("/film/:film_id/actors", get(handlers::film_actors))
        .route("/film/:film_id/inventory", get(handlers::film_inventory))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
