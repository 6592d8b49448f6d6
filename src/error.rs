//! Error types for the upload-status API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Convert to a Response
    ///
    /// In verbose (debug) mode the body carries the concrete failure detail;
    /// otherwise clients get a generic message.
    pub fn to_response(&self, verbose: bool) -> Response {
        let message = if verbose {
            self.to_string()
        } else {
            "bad request".to_string()
        };

        (self.status_code(), Json(ErrorBody { error: message })).into_response()
    }
}
