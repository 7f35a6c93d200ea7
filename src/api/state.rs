//! Shared application state

use std::sync::Arc;

use crate::gateway::ReplySender;
use crate::responder::FaqResponder;

/// State shared by all request handlers
pub struct AppState {
    /// LINE channel secret used to verify webhook signatures
    pub channel_secret: String,
    pub responder: FaqResponder,
    pub gateway: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(
        channel_secret: impl Into<String>,
        responder: FaqResponder,
        gateway: Arc<dyn ReplySender>,
    ) -> Self {
        Self {
            channel_secret: channel_secret.into(),
            responder,
            gateway,
        }
    }
}
