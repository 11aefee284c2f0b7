use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

pub use crate::state::AppState;

/// Default cap on request bodies, uploads included.
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn app(state: Arc<AppState>, body_limit: usize) -> Router {
    routes::system_routes()
        .merge(routes::checker_routes())
        .merge(routes::analysis_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
