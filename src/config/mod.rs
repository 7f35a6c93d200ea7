//! Service configuration loaded from the environment
//!
//! ## Usage
//! ```bash
//! LINE_CHANNEL_SECRET=...            # webhook signature key
//! LINE_CHANNEL_ACCESS_TOKEN=...      # reply API bearer token
//! GOOGLE_SHEET_ID=1AbC...            # spreadsheet holding the FAQ table
//! GOOGLE_CREDENTIALS_JSON='{...}'    # service account key JSON
//! TOKENIZER_DICT_PATH=ipadic-mecab-2_7_0/system.dic.zst
//! PORT=8080 faq-server
//! ```

use std::env;

use crate::types::{BotError, BotResult, Fallbacks};

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_FAQ_RANGE: &str = "FAQ!A:B";
pub const DEFAULT_LINE_API_BASE: &str = "https://api.line.me";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,

    // LINE
    pub line_channel_secret: String,
    pub line_channel_access_token: String,
    pub line_api_base: String,

    // Google Sheets
    pub sheet_id: String,
    pub google_credentials_json: String,
    /// A1 range with two columns: keywords, answer
    pub faq_range: String,
    pub sheets_api_base: String,

    /// Vibrato system dictionary (`.dic` or `.dic.zst`)
    pub dictionary_path: String,
    /// Optional JSON synonym table replacing the built-in one
    pub synonyms_path: Option<String>,

    /// Timeout for outbound API calls
    pub http_timeout_secs: u64,

    pub fallbacks: Fallbacks,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary lookup (useful for testing)
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| BotError::Config(format!("{} is not set", name)))
        };

        let port = match optional("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| BotError::Config(format!("PORT is not a valid port: {}", port)))?,
            None => DEFAULT_PORT,
        };

        let http_timeout_secs = match optional("HTTP_TIMEOUT_SECS") {
            Some(secs) => secs.trim().parse().map_err(|_| {
                BotError::Config(format!("HTTP_TIMEOUT_SECS is not a number: {}", secs))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let defaults = Fallbacks::default();
        let fallbacks = Fallbacks {
            not_understood: optional("FALLBACK_NOT_UNDERSTOOD").unwrap_or(defaults.not_understood),
            no_match: optional("FALLBACK_NO_MATCH").unwrap_or(defaults.no_match),
            error: optional("FALLBACK_ERROR").unwrap_or(defaults.error),
        };

        Ok(Self {
            bind_address: optional("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            line_channel_secret: required("LINE_CHANNEL_SECRET")?,
            line_channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            line_api_base: optional("LINE_API_BASE")
                .unwrap_or_else(|| DEFAULT_LINE_API_BASE.to_string()),
            sheet_id: required("GOOGLE_SHEET_ID")?,
            google_credentials_json: required("GOOGLE_CREDENTIALS_JSON")?,
            faq_range: optional("FAQ_SHEET_RANGE").unwrap_or_else(|| DEFAULT_FAQ_RANGE.to_string()),
            sheets_api_base: optional("SHEETS_API_BASE")
                .unwrap_or_else(|| DEFAULT_SHEETS_API_BASE.to_string()),
            dictionary_path: required("TOKENIZER_DICT_PATH")?,
            synonyms_path: optional("SYNONYMS_PATH"),
            http_timeout_secs,
            fallbacks,
        })
    }

    /// `host:port` to bind the listener to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
