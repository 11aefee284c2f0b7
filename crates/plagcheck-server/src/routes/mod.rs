pub mod analysis;
pub mod checker;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", axum::routing::get(system::root))
        .route("/health", axum::routing::get(system::health))
}

pub fn checker_routes() -> Router<Arc<AppState>> {
    Router::new().route("/checker", axum::routing::post(checker::upload))
}

pub fn analysis_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/analyze", axum::routing::post(analysis::analyze))
        .route("/api/render", axum::routing::post(analysis::render))
}
