//! HTTP route handlers — matches the original Flask API surface.

pub mod reviews;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", reviews::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
