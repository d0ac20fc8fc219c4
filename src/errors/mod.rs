//! Error handling module for the Copydesk submission workflow.
//!
//! Provides centralized error types with stable error codes and mappings from
//! the transport and serialization layers.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const GRAPHQL_ERROR: &str = "GRAPHQL_ERROR";
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// HTTP transport failure (connection, timeout, non-success status)
    Transport(String),
    /// Errors reported by the GraphQL server in the response envelope
    Graphql(String),
    /// Response body that does not match the expected shape
    MalformedResponse(String),
    /// Referenced entity does not exist (e.g. unknown contributor name)
    NotFound(String),
    /// Invalid configuration (e.g. unparseable endpoint URL)
    Config(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::Graphql(_) => codes::GRAPHQL_ERROR,
            AppError::MalformedResponse(_) => codes::MALFORMED_RESPONSE,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Transport(msg) => msg.clone(),
            AppError::Graphql(msg) => msg.clone(),
            AppError::MalformedResponse(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        AppError::Transport(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response decode error: {:?}", err);
        AppError::MalformedResponse(format!("Response decode error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        tracing::error!("Endpoint URL error: {:?}", err);
        AppError::Config(format!("Endpoint URL error: {}", err))
    }
}
