use crate::config::{Config, Operation};
use crate::error::Result;
use crate::utils::mask_token;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Minimal Bot API client for the webhook management calls.
///
/// Responses are returned as raw JSON; an `"ok": false` body is still a
/// successful call from the client's point of view.
pub struct TelegramClient {
    api_url: String,
    token: String,
    client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            api_url: config.api_url.clone(),
            token: config.bot_token.clone(),
            client,
        })
    }

    /// `{api}/bot{token}/{method}`, plus `?url=` for `setWebhook`.
    fn build_url(&self, token: &str, operation: Operation, callback_url: Option<&str>) -> String {
        let url = format!("{}/bot{}/{}", self.api_url, token, operation.method());
        match callback_url {
            Some(callback) => format!("{}?url={}", url, urlencoding::encode(callback)),
            None => url,
        }
    }

    /// Full `setWebhook` request URL for the given callback.
    pub fn set_webhook_url(&self, callback_url: &str) -> String {
        self.build_url(&self.token, Operation::SetWebhook, Some(callback_url))
    }

    pub fn delete_webhook_url(&self) -> String {
        self.build_url(&self.token, Operation::DeleteWebhook, None)
    }

    pub async fn set_webhook(&self, callback_url: &str) -> Result<Value> {
        info!("Registering webhook {}", callback_url);
        self.get(Operation::SetWebhook, Some(callback_url)).await
    }

    pub async fn delete_webhook(&self) -> Result<Value> {
        info!("Deleting webhook");
        self.get(Operation::DeleteWebhook, None).await
    }

    async fn get(&self, operation: Operation, callback_url: Option<&str>) -> Result<Value> {
        let url = self.build_url(&self.token, operation, callback_url);
        debug!("GET {}", self.masked_url(operation, callback_url));

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("Telegram answered {} ({} bytes)", status, body.len());

        let json: Value = serde_json::from_str(&body)?;

        if json.get("ok").and_then(Value::as_bool) != Some(true) {
            let description = json
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            warn!("Telegram reported failure ({}): {}", status, description);
        }

        Ok(json)
    }

    /// Request URL with the token masked, for logging.
    fn masked_url(&self, operation: Operation, callback_url: Option<&str>) -> String {
        self.build_url(&mask_token(&self.token), operation, callback_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(api_url: &str, token: &str) -> TelegramClient {
        let config = Config {
            bot_token: token.to_string(),
            public_url: None,
            api_url: api_url.to_string(),
            timeout: Duration::from_secs(5),
        };
        TelegramClient::new(&config).unwrap()
    }

    #[test]
    fn set_webhook_url_encodes_callback() {
        let client = client("https://api.telegram.org", "ABC123");
        assert_eq!(
            client.set_webhook_url("https://example.com/telegram/webhook"),
            "https://api.telegram.org/botABC123/setWebhook?url=https%3A%2F%2Fexample.com%2Ftelegram%2Fwebhook"
        );
    }

    #[test]
    fn set_webhook_url_encodes_query_characters() {
        let client = client("https://api.telegram.org", "ABC123");
        assert_eq!(
            client.set_webhook_url("https://example.com/a b?x=1&y=2/telegram/webhook"),
            "https://api.telegram.org/botABC123/setWebhook?url=https%3A%2F%2Fexample.com%2Fa%20b%3Fx%3D1%26y%3D2%2Ftelegram%2Fwebhook"
        );
    }

    #[test]
    fn delete_webhook_url_has_no_query() {
        let client = client("https://api.telegram.org", "ABC123");
        assert_eq!(
            client.delete_webhook_url(),
            "https://api.telegram.org/botABC123/deleteWebhook"
        );
    }

    #[test]
    fn masked_url_hides_token() {
        let token = "123456789:AAHfiqksKZ8WmR2zSjiQ7_v4TMAKdiHm9T0";
        let client = client("https://api.telegram.org", token);
        assert_eq!(
            client.masked_url(Operation::DeleteWebhook, None),
            "https://api.telegram.org/bot1234***m9T0/deleteWebhook"
        );
    }

    #[test]
    fn masked_url_leaves_host_alone_for_short_token() {
        // Token text that also occurs in the host and the callback.
        let client = client("https://api.telegram.org", "api");
        assert_eq!(
            client.masked_url(Operation::DeleteWebhook, None),
            "https://api.telegram.org/bot***/deleteWebhook"
        );
        assert_eq!(
            client.masked_url(Operation::SetWebhook, Some("https://api.example.com/telegram/webhook")),
            "https://api.telegram.org/bot***/setWebhook?url=https%3A%2F%2Fapi.example.com%2Ftelegram%2Fwebhook"
        );
    }
}
