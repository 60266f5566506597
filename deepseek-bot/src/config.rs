//! Application config: Telegram side plus completion API side, built once at startup and passed down.

use anyhow::{bail, Result};
use dbot_telegram::TelegramConfig;
use llm_client::DeepSeekConfig;

/// Log file used when LOG_FILE is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/deepseek-bot.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub deepseek: DeepSeekConfig,
}

impl AppConfig {
    /// Loads from env. TELEGRAM_TOKEN, DEEPSEEK_API_KEY and DEEPSEEK_API_URL are required.
    pub fn load() -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env()?,
            deepseek: DeepSeekConfig::from_env()?,
        })
    }

    /// DEEPSEEK_API_URL and TELEGRAM_API_URL (if set) must be valid URLs.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if reqwest::Url::parse(&self.deepseek.api_url).is_err() {
            bail!(
                "DEEPSEEK_API_URL is not a valid URL: {}",
                self.deepseek.api_url
            );
        }
        Ok(())
    }

    pub fn log_file(&self) -> &str {
        self.telegram
            .log_file
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILE)
    }
}
