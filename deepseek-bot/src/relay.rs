//! The update loop: drains incoming messages one at a time, asks the completion client, replies.
//!
//! Every per-message failure ends up either in the chat (`Error: <detail>`) or in the log;
//! nothing is retried and nothing stops the loop.

use std::sync::Arc;

use dbot_core::{Bot, Message, OutgoingMessage};
use llm_client::LlmClient;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Longest error detail (in characters) embedded in a chat reply; the log keeps the full text.
pub const ERROR_DETAIL_LIMIT: usize = 1000;

/// Formats a completion failure for the chat: `Error: <detail>`, detail capped at [`ERROR_DETAIL_LIMIT`].
pub fn error_reply(detail: &str) -> String {
    match detail.char_indices().nth(ERROR_DETAIL_LIMIT) {
        Some((cut, _)) => format!("Error: {}...", &detail[..cut]),
        None => format!("Error: {}", detail),
    }
}

/// Sequential relay between the update channel, the completion client and the bot.
#[derive(Clone)]
pub struct Relay {
    llm: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
}

impl Relay {
    pub fn new(llm: Arc<dyn LlmClient>, bot: Arc<dyn Bot>) -> Self {
        Self { llm, bot }
    }

    /// Builds the reply for one message, or None when the message has no text.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    pub async fn reply_for(&self, message: &Message) -> Option<OutgoingMessage> {
        if message.is_empty() {
            debug!(message_id = %message.id, "Skipping message without text");
            return None;
        }

        let text = match self.llm.complete(&message.content).await {
            Ok(content) => {
                info!(reply_len = content.len(), "Completion received");
                content
            }
            Err(e) => {
                error!(error = %e, "Completion failed");
                error_reply(&e.to_string())
            }
        };

        Some(OutgoingMessage::reply_to(message, text))
    }

    /// Processes one message end to end. Send failures are logged only.
    pub async fn handle_message(&self, message: &Message) {
        let Some(reply) = self.reply_for(message).await else {
            return;
        };

        match self.bot.send_message(&reply).await {
            Ok(()) => info!(chat_id = reply.chat_id, "Reply sent"),
            Err(e) => error!(chat_id = reply.chat_id, error = %e, "Failed to send reply"),
        }
    }

    /// Drains `updates` in arrival order until every sender is dropped.
    pub async fn run(&self, mut updates: mpsc::UnboundedReceiver<Message>) {
        info!("Relay started");
        while let Some(message) = updates.recv().await {
            self.handle_message(&message).await;
        }
        info!("Update channel closed; relay stopped");
    }
}
