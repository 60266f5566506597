//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, DbotError, OutgoingMessage, RenderMode, Result};
use teloxide::{
    payloads::SendMessageSetters,
    requests::Requester,
    types::{ChatId, ParseMode},
};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Replies use Telegram's legacy `Markdown` mode.
#[allow(deprecated)]
fn parse_mode(mode: RenderMode) -> ParseMode {
    match mode {
        RenderMode::Markdown => ParseMode::Markdown,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat_id), message.text.clone())
            .parse_mode(parse_mode(message.render_mode))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
