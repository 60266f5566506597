//! # LLM client
//!
//! Defines the [`LlmClient`] trait and a DeepSeek (OpenAI-compatible chat completions) implementation.
//! Each call is a stateless one-shot completion: one user message in, the first choice's content out.
//! Provides token masking for safe logging.

use async_trait::async_trait;

mod config;
mod deepseek;
mod error;

pub use config::DeepSeekConfig;
pub use deepseek::{complete, DeepSeekClient, DEFAULT_MODEL, REQUEST_TIMEOUT};
pub use error::CompletionError;

/// Completion interface used by the relay: given raw user text, returns the model reply.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, text: &str) -> Result<String, CompletionError>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
