use serde_json::Value;
use std::io::{self, Write};

/// Path on the public server where the webhook receiver listens.
pub const WEBHOOK_PATH: &str = "/telegram/webhook";

/// Masks a bot token for logging: first 4 + "***" + last 4 chars.
/// Tokens of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Callback URL Telegram should post updates to.
pub fn webhook_url(public_url: &str) -> String {
    format!("{}{}", public_url, WEBHOOK_PATH)
}

/// Writes the response as one line of compact JSON.
pub fn write_response<W: Write>(mut out: W, response: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut out, response)?;
    writeln!(out)?;
    out.flush()
}
