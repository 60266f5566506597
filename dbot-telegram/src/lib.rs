//! # dbot-telegram
//!
//! Telegram transport layer: adapters to [`dbot_core`] types, [`dbot_core::Bot`] implementation,
//! minimal config, and the long-polling update source that feeds a channel.
//! Handles only Telegram connectivity; no completion logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{
    authenticate, build_bot, run_update_source, single_worker, HTTP_TIMEOUT, POLL_TIMEOUT,
};
