//! Upload-status API endpoints

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

/// Receive an upload-status report and echo it back.
///
/// The payload is an arbitrary JSON value; its shape is never inspected.
/// The body is parsed regardless of the request's Content-Type. The parsed
/// value is logged for operator visibility and returned unchanged.
pub async fn upload_status(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(payload) => {
            tracing::info!(payload = %payload, "processing upload status");
            Json(payload).into_response()
        }
        Err(e) => ApiError::MalformedBody(e).to_response(state.config.debug),
    }
}
