//! # DeepSeek relay bot
//!
//! Receives Telegram text messages, forwards each one as a one-shot prompt to the DeepSeek chat API,
//! and replies to the originating chat with the completion (or `Error: <detail>`).
//! Wires dbot-telegram (update source, sender) and llm-client (completion) through [`Relay`].

pub mod config;
pub mod relay;
pub mod runner;

pub use config::{AppConfig, DEFAULT_LOG_FILE};
pub use relay::{error_reply, Relay, ERROR_DETAIL_LIMIT};
pub use runner::run_bot;
