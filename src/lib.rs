//! Upload-status server
//!
//! HTTP server for IDE-plugin upload-status reports. A single endpoint
//! accepts an arbitrary JSON payload, logs it, and echoes it back.

pub mod api;
pub mod config;
pub mod error;
pub mod router;

use crate::config::AppConfig;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
}
