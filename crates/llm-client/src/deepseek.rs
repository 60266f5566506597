//! DeepSeek chat-completions client over reqwest.
//!
//! Wire contract: `POST <endpoint>` with `Authorization: Bearer <key>` and a JSON body
//! `{"model": "deepseek-chat", "messages": [{"role": "user", "content": <text>}]}`.
//! Replies are `{"choices": [{"message": {"content": ...}}]}` or `{"error": {"message": ...}}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{mask_token, CompletionError, DeepSeekConfig, LlmClient};

/// Model sent with every request.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Total time allowed for one call, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> CompletionRequest<'a> {
    fn user(text: &'a str) -> Self {
        Self {
            model: DEFAULT_MODEL,
            messages: vec![RequestMessage {
                role: "user",
                content: text,
            }],
        }
    }
}

// Every field tolerates both absence and `null`.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

/// Completion client bound to one endpoint and API key. Cheap to clone; shares the HTTP connection pool.
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl DeepSeekClient {
    /// Builds a client with the default 30-second timeout.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, CompletionError> {
        Self::with_timeout(endpoint, api_key, REQUEST_TIMEOUT)
    }

    /// Builds a client with a custom total request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
        })
    }

    pub fn from_config(config: &DeepSeekConfig) -> Result<Self, CompletionError> {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    /// Sends `text` as a single user message and returns the first choice's content.
    ///
    /// The status check happens before JSON parsing, so a non-200 reply with any body becomes
    /// [`CompletionError::Status`]. A 200 reply carrying an `error` object is
    /// [`CompletionError::Api`] even if `choices` is populated; no choices at all is
    /// [`CompletionError::EmptyResponse`]. Nothing is retried.
    #[instrument(skip(self, text), fields(endpoint = %self.endpoint, text_len = text.len()))]
    pub async fn chat_completion(&self, text: &str) -> Result<String, CompletionError> {
        let body = serde_json::to_vec(&CompletionRequest::user(text)).map_err(CompletionError::Encode)?;

        info!(
            model = DEFAULT_MODEL,
            api_key = %mask_token(&self.api_key),
            "DeepSeek chat_completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.timeout)
                } else if e.is_builder() {
                    CompletionError::Build(e)
                } else {
                    CompletionError::Send(e)
                }
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(self.timeout)
            } else {
                CompletionError::ReadBody(e)
            }
        })?;

        if status != StatusCode::OK {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let content = parse_completion(&bytes)?;
        info!(content_len = content.len(), "DeepSeek chat_completion done");
        Ok(content)
    }
}

#[async_trait]
impl LlmClient for DeepSeekClient {
    async fn complete(&self, text: &str) -> Result<String, CompletionError> {
        self.chat_completion(text).await
    }
}

/// One-shot completion: builds a client for `endpoint_url` / `api_key` and sends `text`.
pub async fn complete(text: &str, endpoint_url: &str, api_key: &str) -> Result<String, CompletionError> {
    DeepSeekClient::new(endpoint_url, api_key)?
        .chat_completion(text)
        .await
}

fn parse_completion(body: &[u8]) -> Result<String, CompletionError> {
    let response: CompletionResponse =
        serde_json::from_slice(body).map_err(CompletionError::Decode)?;

    if let Some(error) = response.error {
        return Err(CompletionError::Api(error.message.unwrap_or_default()));
    }

    let choice = response
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyResponse)?;
    Ok(choice
        .message
        .and_then(|message| message.content)
        .unwrap_or_default())
}
