//! Data types for the FAQ responder
//!
//! This module contains the core data structures passed between the tokenizer,
//! the matcher and the HTTP layer.

mod error;
mod faq;
mod keyword;

pub use error::BotError;
pub use faq::{Fallbacks, FaqRow, MatchResult};
pub use keyword::{Keyword, PartOfSpeech};

/// Result type for service operations
pub type BotResult<T> = Result<T, BotError>;
