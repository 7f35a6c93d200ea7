//! Message → answer pipeline
//!
//! Ties keyword extraction, the FAQ source and the matcher together. Every
//! call re-reads the FAQ table; only the synonym map and the tokenizer are
//! shared between requests.

use std::sync::Arc;

use tracing::{debug, error};

use crate::faq_source::FaqSource;
use crate::search::{match_faq, SynonymMap};
use crate::tokenizer::KeywordExtractor;
use crate::types::{BotResult, Fallbacks, MatchResult};

/// Answers free-text questions from the FAQ table
pub struct FaqResponder {
    extractor: KeywordExtractor,
    synonyms: Arc<SynonymMap>,
    source: Arc<dyn FaqSource>,
    fallbacks: Fallbacks,
}

impl FaqResponder {
    pub fn new(
        extractor: KeywordExtractor,
        synonyms: Arc<SynonymMap>,
        source: Arc<dyn FaqSource>,
        fallbacks: Fallbacks,
    ) -> Self {
        Self {
            extractor,
            synonyms,
            source,
            fallbacks,
        }
    }

    /// Match a question against a freshly fetched FAQ table
    pub async fn resolve(&self, question: &str) -> BotResult<MatchResult> {
        let keywords = self.extractor.extract(question);
        debug!(
            keywords = ?keywords.iter().map(|k| k.surface.as_str()).collect::<Vec<_>>(),
            "Extracted keywords"
        );

        if keywords.is_empty() {
            return Ok(MatchResult::NotUnderstood);
        }

        let rows = self.source.fetch_rows().await?;
        Ok(match_faq(&keywords, &rows, &self.synonyms))
    }

    /// The reply text for a question; a failed table read becomes the error reply
    pub async fn answer(&self, question: &str) -> String {
        match self.resolve(question).await {
            Ok(result) => result.into_reply(&self.fallbacks),
            Err(e) => {
                error!(error = %e, "Failed to read FAQ table");
                self.fallbacks.error.clone()
            }
        }
    }

    pub fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }
}
