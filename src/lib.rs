//! Register and remove a Telegram bot webhook through the Bot API.

pub mod api_client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use api_client::TelegramClient;
pub use config::{Config, Operation};
pub use error::{Result, WebhookError};
