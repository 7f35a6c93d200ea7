//! LINE webhook payload types
//!
//! Only the fields needed to answer text messages are modelled; everything
//! else in the payload is ignored by serde.

use serde::Deserialize;

/// Request body of a LINE webhook delivery
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// A single webhook event (`message`, `follow`, `postback`, ...)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<EventMessage>,
}

/// Message object of a `message` event
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventMessage {
    Text {
        #[serde(default)]
        id: String,
        text: String,
    },
    /// Stickers, images, locations and other non-text messages
    #[serde(other)]
    Other,
}

impl WebhookEvent {
    /// `(reply_token, text)` when this is a text message event that can be answered
    pub fn text_message(&self) -> Option<(&str, &str)> {
        if self.event_type != "message" {
            return None;
        }

        match (&self.message, self.reply_token.as_deref()) {
            (Some(EventMessage::Text { text, .. }), Some(reply_token)) => {
                Some((reply_token, text.as_str()))
            }
            _ => None,
        }
    }
}
