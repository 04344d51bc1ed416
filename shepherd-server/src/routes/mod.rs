//! Router assembly

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::core::ServerState;

/// All API routes, without middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::members::router())
        .merge(api::gdis::router())
        .merge(api::ministry_areas::router())
        .merge(api::meeting_series::router())
        .merge(api::meetings::router())
}

/// Finished application: routes + middleware + state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
