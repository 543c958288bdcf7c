use crate::error::{Result, WebhookError};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which Bot API call a configuration is loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SetWebhook,
    DeleteWebhook,
}

impl Operation {
    /// Bot API method name used in the request path.
    pub fn method(self) -> &'static str {
        match self {
            Operation::SetWebhook => "setWebhook",
            Operation::DeleteWebhook => "deleteWebhook",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    /// Only set for [`Operation::SetWebhook`].
    pub public_url: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env(operation: Operation) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(operation, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(operation: Operation, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let bot_token = non_empty("BOT_TOKEN");
        let public_url = match operation {
            Operation::SetWebhook => non_empty("PUBLIC_URL"),
            Operation::DeleteWebhook => None,
        };

        let bot_token = match (operation, bot_token, &public_url) {
            (Operation::SetWebhook, Some(token), Some(_)) => token,
            (Operation::SetWebhook, token, _) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push("BOT_TOKEN");
                }
                if public_url.is_none() {
                    missing.push("PUBLIC_URL");
                }
                return Err(WebhookError::Config(format!("{} missing", missing.join("/"))));
            }
            (Operation::DeleteWebhook, Some(token), _) => token,
            (Operation::DeleteWebhook, None, _) => {
                return Err(WebhookError::Config("BOT_TOKEN missing".to_string()));
            }
        };

        let api_url = non_empty("TELEGRAM_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match non_empty("TELEGRAM_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(WebhookError::Config(format!(
                        "TELEGRAM_HTTP_TIMEOUT_SECS must be a positive integer, got {:?}",
                        raw
                    )));
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            bot_token,
            public_url,
            api_url,
            timeout,
        })
    }
}
