//! LINE Messaging API reply client

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use super::ReplySender;
use crate::types::{BotError, BotResult};

/// Maximum length of a LINE text message, in UTF-16 code units
pub const MAX_TEXT_UNITS: usize = 5000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    text: &'a str,
}

/// Sends replies through `POST /v2/bot/message/reply`
pub struct LineClient {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl LineClient {
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            access_token: access_token.into(),
        }
    }

    fn reply_url(&self) -> String {
        format!("{}/v2/bot/message/reply", self.api_base.trim_end_matches('/'))
    }
}

/// Truncate to the LINE text limit on a char boundary
fn clamp_text(text: &str) -> &str {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > MAX_TEXT_UNITS {
            return &text[..index];
        }
    }
    text
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply_text(&self, reply_token: &str, text: &str) -> BotResult<()> {
        let body = ReplyRequest {
            reply_token,
            messages: vec![TextMessage {
                message_type: "text",
                text: clamp_text(text),
            }],
        };

        let response = self
            .client
            .post(self.reply_url())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Gateway(format!(
                "reply API returned {}: {}",
                status, body
            )));
        }

        info!(reply_token = %reply_token, "Reply sent");
        Ok(())
    }
}
