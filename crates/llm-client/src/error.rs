//! Errors of a single completion call, one variant per failing stage.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("failed to send request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("API returned error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("empty response from API")]
    EmptyResponse,
}
