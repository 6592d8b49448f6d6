//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the listener to
    pub host: String,

    /// Port to bind the listener to
    pub port: u16,

    /// Debug mode: include failure detail in error response bodies
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("UPLOAD_STATUS_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("UPLOAD_STATUS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),

            debug: env::var("UPLOAD_STATUS_DEBUG")
                .map(|s| parse_bool(&s))
                .unwrap_or(true),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("yes"));
        assert!(parse_bool(" on "));
    }

    #[test]
    fn test_parse_bool_falsy() {
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("nope"));
    }
}
