//! # dbot-core
//!
//! Core types and traits for the relay bot: [`Bot`], incoming [`Message`] and [`OutgoingMessage`],
//! and tracing initialization. Transport-agnostic; used by dbot-telegram and deepseek-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Message, OutgoingMessage, RenderMode, ToCoreMessage, User};
