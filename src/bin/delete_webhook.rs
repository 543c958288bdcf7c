use anyhow::{Context, Result};
use telegram_webhook::config::{Config, Operation};
use telegram_webhook::{commands, logging, utils};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env(Operation::DeleteWebhook)?;
    info!("Telegram API: {}", config.api_url);

    let response = commands::delete_webhook(&config).await?;

    utils::write_response(std::io::stdout().lock(), &response)
        .context("Failed to write response to stdout")?;

    Ok(())
}
