//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handler, state::AppState};

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route(
            "/participants",
            post(handler::join).get(handler::list_participants),
        )
        .route(
            "/messages",
            post(handler::send_message).get(handler::list_messages),
        )
        .route(
            "/messages/{id}",
            put(handler::edit_message).delete(handler::delete_message),
        )
        .route("/status", post(handler::heartbeat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
