//! LINE Messaging API gateway
//!
//! Provides the pieces the webhook handler needs:
//! - `events`: webhook payload types
//! - `signature`: `X-Line-Signature` verification
//! - `client`: reply delivery

pub mod client;
pub mod events;
pub mod signature;

use async_trait::async_trait;

use crate::types::BotResult;

pub use client::LineClient;
pub use events::{EventMessage, WebhookEvent, WebhookPayload};
pub use signature::{sign, verify_signature, SIGNATURE_HEADER};

/// Delivers a reply correlated to an inbound event
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply_text(&self, reply_token: &str, text: &str) -> BotResult<()>;
}
