//! GraphQL transport module.
//!
//! A thin JSON-over-HTTP GraphQL client plus the operation documents used by
//! the submission workflow. Transport failures, server-reported errors, and
//! malformed envelopes all surface as [`AppError`] variants.

mod operations;

pub use operations::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::errors::AppError;

/// The POST body of a GraphQL request.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

/// One error entry from the response envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

/// The GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct GraphqlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

/// GraphQL client over HTTP.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphqlClient {
    /// Build a client from application configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let endpoint = Url::parse(&config.graphql_endpoint)?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// Build a client for an explicit endpoint with default settings.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, AppError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Execute one GraphQL operation and decode its `data` payload.
    pub async fn execute<V, D>(&self, query: &str, variables: &V) -> Result<D, AppError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        tracing::debug!(endpoint = %self.endpoint, "Executing GraphQL operation");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "GraphQL endpoint returned HTTP {}",
                status
            )));
        }

        let envelope: GraphqlResponse<D> = response.json().await?;

        if !envelope.errors.is_empty() {
            let messages: Vec<&str> = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect();
            tracing::warn!("GraphQL operation failed: {}", messages.join("; "));
            return Err(AppError::Graphql(messages.join("; ")));
        }

        envelope.data.ok_or_else(|| {
            AppError::MalformedResponse("Response carried neither data nor errors".to_string())
        })
    }
}
