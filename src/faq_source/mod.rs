//! FAQ table sources
//!
//! The FAQ table is owned by an external service and is re-read for every
//! inbound message. Nothing here caches rows.

mod google_auth;
mod sheets;

use async_trait::async_trait;

use crate::types::{BotResult, FaqRow};

pub use google_auth::{
    AccessTokenProvider, ServiceAccountAuth, ServiceAccountKey, SHEETS_READONLY_SCOPE,
};
pub use sheets::SheetsFaqSource;

/// Provides the current FAQ rows in table order
#[async_trait]
pub trait FaqSource: Send + Sync {
    async fn fetch_rows(&self) -> BotResult<Vec<FaqRow>>;
}

/// Fixed in-memory table
#[derive(Debug, Clone, Default)]
pub struct StaticFaqSource {
    rows: Vec<FaqRow>,
}

impl StaticFaqSource {
    pub fn new(rows: Vec<FaqRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl FaqSource for StaticFaqSource {
    async fn fetch_rows(&self) -> BotResult<Vec<FaqRow>> {
        Ok(self.rows.clone())
    }
}
