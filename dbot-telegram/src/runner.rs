//! Update source: long-polls Telegram and forwards every message, converted to core::Message, into a channel.
//! All updates go through one dispatcher worker, so the channel sees them in getUpdates order;
//! the consumer drains it one message at a time.

use std::time::Duration;

use anyhow::{Context, Result};
use dbot_core::{Message, ToCoreMessage};
use teloxide::{
    dispatching::{Dispatcher, UpdateFilterExt},
    error_handlers::LoggingErrorHandler,
    requests::Requester,
    respond,
    types::Update,
    update_listeners::Polling,
};
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::config::TelegramConfig;

/// Long-poll timeout passed to getUpdates.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP timeout of the Telegram client; must outlast a full long-poll.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(75);

/// Builds the teloxide Bot: token from config, client timeout above [`POLL_TIMEOUT`], optional custom API URL.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let client = teloxide::net::default_reqwest_settings()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("Failed to create Telegram HTTP client")?;
    let bot = teloxide::Bot::with_client(config.bot_token.clone(), client);

    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Checks the bot session with getMe and returns the bot's username.
#[instrument(skip(bot))]
pub async fn authenticate(bot: &teloxide::Bot) -> Result<String> {
    let me = bot
        .get_me()
        .await
        .context("Failed to authenticate bot session")?;
    let username = me.user.username.clone().unwrap_or_default();
    info!(username = %username, bot_id = me.user.id.0, "Bot session authenticated");
    Ok(username)
}

/// Dispatcher distribution key: one key for every update, i.e. a single worker in arrival order.
pub fn single_worker(_update: &Update) -> Option<()> {
    Some(())
}

/// Long-polls updates until shutdown (Ctrl-C) and sends each message into `updates`.
///
/// Returns when polling stops; dropping the last sender then closes the channel for the consumer.
#[instrument(skip(bot, updates))]
pub async fn run_update_source(bot: teloxide::Bot, updates: mpsc::UnboundedSender<Message>) {
    let listener = Polling::builder(bot.clone()).timeout(POLL_TIMEOUT).build();

    let handler = Update::filter_message().endpoint(move |msg: teloxide::types::Message| {
        let updates = updates.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                chat_type = %core_msg.chat.chat_type,
                message_id = %core_msg.id,
                has_text = !core_msg.is_empty(),
                "Received message"
            );

            if updates.send(core_msg).is_err() {
                warn!(chat_id = msg.chat.id.0, "Update channel closed; message dropped");
            }
            respond(())
        }
    });

    Dispatcher::builder(bot, handler)
        .default_handler(|_| async {})
        .distribution_function(single_worker)
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Update source stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(update_id: i32, chat_id: i64) -> Update {
        serde_json::from_value(json!({
            "update_id": update_id,
            "message": {
                "message_id": update_id,
                "date": 1706529600,
                "chat": {"id": chat_id, "type": "private"},
                "from": {"id": chat_id, "is_bot": false, "first_name": "U"},
                "text": "hello"
            }
        }))
        .expect("valid Telegram update JSON")
    }

    /// **Test: Updates from different chats share one worker key, so they are handled in arrival order.**
    #[test]
    fn test_single_worker_same_key_across_chats() {
        let first = update(1, 100);
        let second = update(2, 200);
        assert_eq!(single_worker(&first), Some(()));
        assert_eq!(single_worker(&first), single_worker(&second));
    }
}
