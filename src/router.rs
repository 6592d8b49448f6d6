//! Route table for the upload-status server

use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::AppState;

/// Create the application router.
///
/// One route is defined. Requests to any other path get the router's 404,
/// and non-POST requests to the defined path get its 405.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/plugin/api/upload_status", post(api::upload_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
