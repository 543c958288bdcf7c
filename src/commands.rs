use crate::api_client::TelegramClient;
use crate::config::Config;
use crate::error::{Result, WebhookError};
use crate::utils::webhook_url;
use serde_json::Value;

/// Registers `<public_url>/telegram/webhook` as the bot's webhook.
pub async fn set_webhook(config: &Config) -> Result<Value> {
    let public_url = config
        .public_url
        .as_deref()
        .ok_or_else(|| WebhookError::Config("PUBLIC_URL missing".to_string()))?;

    let client = TelegramClient::new(config)?;
    client.set_webhook(&webhook_url(public_url)).await
}

/// Removes the bot's webhook.
pub async fn delete_webhook(config: &Config) -> Result<Value> {
    let client = TelegramClient::new(config)?;
    client.delete_webhook().await
}
