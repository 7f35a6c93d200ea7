//! FAQ matching
//!
//! First-match-wins substring matching: rows are scanned in table order and
//! the first row whose (synonym expanded) keyword terms appear inside any
//! extracted keyword provides the answer. There is no scoring; the earliest
//! row always wins a tie.

use tracing::debug;

use super::SynonymMap;
use crate::types::{FaqRow, Keyword, MatchResult};

/// Match extracted keywords against FAQ rows
pub fn match_faq(keywords: &[Keyword], rows: &[FaqRow], synonyms: &SynonymMap) -> MatchResult {
    if keywords.is_empty() {
        return MatchResult::NotUnderstood;
    }

    let keywords: Vec<String> = keywords.iter().map(|k| k.surface.to_lowercase()).collect();

    for (index, row) in rows.iter().enumerate() {
        let Some(answer) = row.answer.as_deref() else {
            continue;
        };

        if row_matches(&keywords, &row.keywords, synonyms) {
            debug!(row = index, keywords = %row.keywords, "FAQ row matched");
            return MatchResult::Answer(answer.to_string());
        }
    }

    MatchResult::NoMatch
}

/// Check one row's keyword text against lower-cased input keywords.
///
/// A row matches when any expansion of any of its terms is a substring of
/// any input keyword.
pub fn row_matches(keywords: &[String], keyword_text: &str, synonyms: &SynonymMap) -> bool {
    let expansions: Vec<Vec<String>> = keyword_text
        .to_lowercase()
        .split_whitespace()
        .map(|term| {
            synonyms
                .expand(term)
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect()
        })
        .collect();

    keywords.iter().any(|keyword| {
        expansions
            .iter()
            .flatten()
            .any(|synonym| keyword.contains(synonym.as_str()))
    })
}
