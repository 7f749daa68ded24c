use anyhow::{bail, Result};
use reqwest::Client;
use serde::Serialize;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_key: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
    parse_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_thread_id: Option<i64>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given API key and chat ID.
    pub fn new(client: Client, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            api_key,
            chat_id,
        }
    }

    /// Sends a Markdown-formatted message to the configured chat.
    pub async fn push_message(&self, text: &str) -> Result<()> {
        self.send(text, None).await
    }

    /// Sends a Markdown-formatted message to a forum topic (sub-channel)
    /// of the configured chat.
    pub async fn push_message_to_thread(&self, text: &str, thread_id: i64) -> Result<()> {
        self.send(text, Some(thread_id)).await
    }

    async fn send(&self, text: &str, message_thread_id: Option<i64>) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.api_key);
        let body = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "Markdown",
            message_thread_id,
        };
        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("telegram sendMessage failed: {} {}", status, body);
        }
        Ok(())
    }
}
