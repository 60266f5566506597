//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide, tests substitute recorders.

use crate::error::Result;
use crate::types::OutgoingMessage;
use async_trait::async_trait;

/// Sends replies back to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `message.text` to `message.chat_id` using `message.render_mode`.
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()>;
}
