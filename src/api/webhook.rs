//! LINE webhook endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::{debug, error, warn};

use super::state::AppState;
use crate::gateway::{verify_signature, WebhookPayload, SIGNATURE_HEADER};

/// POST /callback - Answer text messages from a LINE webhook delivery
///
/// - Missing or invalid `X-Line-Signature`: 400, nothing is processed
/// - Body that is not a webhook payload: 500
/// - Otherwise 200, even if a reply could not be delivered
pub async fn handle_callback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !verify_signature(&state.channel_secret, &body, signature) {
        warn!("Invalid LINE signature, rejecting webhook");
        return StatusCode::BAD_REQUEST;
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "Failed to parse webhook payload");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    for event in &payload.events {
        let Some((reply_token, text)) = event.text_message() else {
            debug!(event_type = %event.event_type, "Ignoring non-text event");
            continue;
        };

        debug!(text = %text, "Received message");
        let answer = state.responder.answer(text).await;

        if let Err(e) = state.gateway.reply_text(reply_token, &answer).await {
            error!(error = %e, "Reply error");
        }
    }

    StatusCode::OK
}
