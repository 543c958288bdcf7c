use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("{0}")]
    Config(String),

    #[error("Failed to send request to Telegram")]
    Network(#[source] reqwest::Error),

    #[error("Failed to parse Telegram response as JSON")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the bot token.
        WebhookError::Network(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, WebhookError>;
