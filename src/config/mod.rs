//! Configuration module for the Copydesk submission workflow.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint the createArticle mutation is posted to
    pub graphql_endpoint: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let graphql_endpoint = env::var("COPYDESK_GRAPHQL_URL")
            .unwrap_or_else(|_| "http://localhost:3000/graphql".to_string());

        let request_timeout_secs = env::var("COPYDESK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let log_level = env::var("COPYDESK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            graphql_endpoint,
            request_timeout_secs,
            log_level,
        }
    }
}
