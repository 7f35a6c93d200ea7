//! Error type shared across the service

use thiserror::Error;

/// Top-level error type for the FAQ responder
#[derive(Debug, Error)]
pub enum BotError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("synonym table error: {0}")]
    Synonyms(String),

    #[error("FAQ source error: {0}")]
    FaqSource(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
