//! FAQ Responder
//!
//! A LINE bot that answers questions from a Google Sheets FAQ table.
//!
//! # Features
//!
//! - **Keyword extraction**: Japanese morphological analysis keeps nouns, verbs and adjectives
//! - **Synonym expansion**: FAQ keywords match their known equivalents
//! - **First-match-wins**: rows are checked in table order, no scoring
//! - **Always fresh**: the FAQ table is re-read for every message
//!
//! # Modules
//!
//! - `types`: Core data structures (Keyword, FaqRow, MatchResult, BotError)
//! - `tokenizer`: Keyword extraction over a morphological analyzer
//! - `search`: Synonym map and FAQ matcher
//! - `faq_source`: FAQ table providers (Google Sheets)
//! - `gateway`: LINE webhook payloads, signatures and replies
//! - `responder`: Message → answer pipeline
//! - `api`: Axum router with the webhook and health endpoints
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```
//! use faq_responder::{FaqRow, Keyword, SynonymMap, MatchResult};
//! use faq_responder::search::match_faq;
//!
//! let synonyms = SynonymMap::builtin();
//! let rows = vec![FaqRow::new("画像 送信", "画像はこちら")];
//! let keywords = vec![Keyword::noun("写真")];
//!
//! assert_eq!(
//!     match_faq(&keywords, &rows, &synonyms),
//!     MatchResult::Answer("画像はこちら".to_string())
//! );
//! ```

pub mod api;
pub mod config;
pub mod faq_source;
pub mod gateway;
pub mod responder;
pub mod search;
pub mod tokenizer;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use responder::FaqResponder;
pub use search::SynonymMap;
pub use types::{BotError, BotResult, Fallbacks, FaqRow, Keyword, MatchResult, PartOfSpeech};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
