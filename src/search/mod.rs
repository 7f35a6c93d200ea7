//! FAQ matching with synonym expansion
//!
//! This module provides the matching engine:
//! - Synonym expansion from a static, read-only table
//! - First-match-wins substring matching against FAQ rows

mod matcher;
mod synonyms;

pub use matcher::{match_faq, row_matches};
pub use synonyms::{SynonymMap, DEFAULT_SYNONYMS};
