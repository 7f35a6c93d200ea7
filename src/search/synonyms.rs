//! Synonym dictionary for FAQ keyword expansion

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::types::{BotError, BotResult};

/// Built-in synonym table: canonical keyword → equivalent surface forms
pub const DEFAULT_SYNONYMS: &[(&str, &[&str])] = &[
    ("画像", &["写真", "スクリーンショット", "スクショ"]),
    ("名前", &["氏名", "フルネーム", "よびかた"]),
    ("趣味", &["好きなこと", "興味", "遊び"]),
    ("年齢", &["生まれた年", "誕生日", "年数"]),
    ("好きな言葉", &["好きなフレーズ", "好きなセリフ", "好きなことば"]),
    ("吸ってるタバコ", &["タバコ", "煙草", "喫煙"]),
];

/// Immutable mapping from a canonical keyword to its synonyms.
///
/// Keys and values are lower-cased at construction and empty strings are
/// dropped, so lookups are case-insensitive and an expansion never contains
/// a term that would match every input.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymMap {
    /// Create an empty map (every word expands to itself only)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table
    pub fn builtin() -> Self {
        Self::from_entries(
            DEFAULT_SYNONYMS
                .iter()
                .map(|(key, words)| (*key, words.iter().copied())),
        )
    }

    /// Build a map from `(canonical, synonyms)` pairs
    pub fn from_entries<I, K, W, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, W)>,
        K: AsRef<str>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();

        for (key, words) in entries {
            let key = key.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }

            let synonyms = map.entry(key).or_default();
            for word in words {
                let word = word.as_ref().trim().to_lowercase();
                if !word.is_empty() && !synonyms.contains(&word) {
                    synonyms.push(word);
                }
            }
        }

        Self { entries: map }
    }

    /// Parse a JSON object of the form `{"canonical": ["synonym", ...]}`
    pub fn from_json_str(json: &str) -> BotResult<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| BotError::Synonyms(format!("invalid synonym JSON: {}", e)))?;
        Ok(Self::from_entries(raw))
    }

    /// Load the table from a JSON file
    pub fn load(path: impl AsRef<Path>) -> BotResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BotError::Synonyms(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Expand a word into itself plus its synonyms.
    ///
    /// Lookup is an exact match on the lower-cased word. The word itself is
    /// always the first element; duplicates are removed.
    pub fn expand(&self, word: &str) -> Vec<String> {
        let mut expanded = vec![word.to_string()];

        if let Some(synonyms) = self.entries.get(&word.to_lowercase()) {
            for synonym in synonyms {
                if !expanded.contains(synonym) {
                    expanded.push(synonym.clone());
                }
            }
        }

        expanded
    }

    /// Check whether a canonical keyword has an entry
    pub fn contains_key(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Number of canonical keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
