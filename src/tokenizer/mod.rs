//! Keyword extraction
//!
//! Messages are segmented by a morphological analyzer and only content words
//! (nouns, verbs, adjectives) are kept. The analyzer sits behind
//! [`MorphologicalAnalyzer`] so the part-of-speech filter does not depend on
//! a particular dictionary.

mod analyzer;

use std::sync::Arc;

use crate::types::{Keyword, PartOfSpeech};

pub use analyzer::VibratoAnalyzer;

/// A single segment produced by a morphological analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    /// Comma separated IPADIC-style features; the first field is the part of speech
    pub features: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, features: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            features: features.into(),
        }
    }

    /// Part-of-speech class from the leading feature field
    pub fn part_of_speech(&self) -> PartOfSpeech {
        let pos = self.features.split(',').next().unwrap_or("");
        PartOfSpeech::from_ipadic(pos)
    }
}

/// Segments text into morphemes
///
/// Implementations must be safe to share across request tasks.
pub trait MorphologicalAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<Morpheme>;
}

/// Extracts content-word keywords from message text
#[derive(Clone)]
pub struct KeywordExtractor {
    analyzer: Arc<dyn MorphologicalAnalyzer>,
}

impl KeywordExtractor {
    pub fn new(analyzer: impl MorphologicalAnalyzer + 'static) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    /// Extract keywords in order of appearance.
    ///
    /// Blank input yields no keywords without invoking the analyzer.
    pub fn extract(&self, text: &str) -> Vec<Keyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.analyzer
            .analyze(text)
            .into_iter()
            .filter_map(|morpheme| {
                let pos = morpheme.part_of_speech();
                if pos.is_content_word() && !morpheme.surface.trim().is_empty() {
                    Some(Keyword::new(morpheme.surface, pos))
                } else {
                    None
                }
            })
            .collect()
    }
}
