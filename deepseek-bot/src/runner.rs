//! Startup wiring: logging, Telegram session check, completion client, relay task, long polling.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::init_tracing;
use dbot_telegram::{authenticate, build_bot, run_update_source, TelegramBotAdapter};
use llm_client::{mask_token, DeepSeekClient, DEFAULT_MODEL};
use tokio::sync::mpsc;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::relay::Relay;

/// Main entry: validate config, init logging, authenticate, then relay updates until shutdown.
///
/// Any failure before polling starts is fatal and returned. Once running, per-message failures
/// stay inside the relay. Returns after polling stops and the relay has drained the channel.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        api_url = %config.deepseek.api_url,
        api_key = %mask_token(&config.deepseek.api_key),
        model = DEFAULT_MODEL,
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let teloxide_bot = build_bot(&config.telegram)?;
    let username = authenticate(&teloxide_bot).await?;

    let llm = DeepSeekClient::from_config(&config.deepseek)
        .context("Failed to create completion client")?;
    let relay = Relay::new(
        Arc::new(llm),
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let relay_task = tokio::spawn(async move { relay.run(rx).await });

    info!(username = %format!("@{}", username), "Bot started successfully");

    run_update_source(teloxide_bot, tx).await;
    relay_task.await.context("Relay task panicked")?;

    Ok(())
}
