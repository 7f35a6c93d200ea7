//! FAQ table rows and match outcomes

use serde_json::Value;

/// One row of the FAQ table: space separated keywords and the answer to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqRow {
    pub keywords: String,
    /// `None` when the row has no answer cell
    pub answer: Option<String>,
}

impl FaqRow {
    /// Create a complete row
    pub fn new(keywords: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            answer: Some(answer.into()),
        }
    }

    /// Build a row from spreadsheet cells (`[keywords, answer, ...]`).
    ///
    /// Sheets omits trailing empty cells, so a one-cell row has no answer.
    pub fn from_cells(cells: &[Value]) -> Self {
        Self {
            keywords: cells.first().map(cell_text).unwrap_or_default(),
            answer: cells.get(1).map(cell_text),
        }
    }
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Outcome of matching one message against the FAQ table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Answer(String),
    /// No keywords could be extracted from the message
    NotUnderstood,
    /// Keywords were found but no row matched
    NoMatch,
}

impl MatchResult {
    /// Turn the outcome into the text sent back to the user
    pub fn into_reply(self, fallbacks: &Fallbacks) -> String {
        match self {
            MatchResult::Answer(answer) => answer,
            MatchResult::NotUnderstood => fallbacks.not_understood.clone(),
            MatchResult::NoMatch => fallbacks.no_match.clone(),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, MatchResult::Answer(_))
    }
}

/// Canned replies used when no answer is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    pub not_understood: String,
    pub no_match: String,
    pub error: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            not_understood: "ご質問の意図がうまく読み取れませんでした。".to_string(),
            no_match: "その質問にはまだ対応していません。".to_string(),
            error: "エラーが発生しました。".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_cells_complete_row() {
        let row = FaqRow::from_cells(&[json!("画像 送信"), json!("画像はこちら")]);
        assert_eq!(row, FaqRow::new("画像 送信", "画像はこちら"));
    }

    #[test]
    fn test_from_cells_missing_answer() {
        let row = FaqRow::from_cells(&[json!("趣味")]);
        assert_eq!(row.keywords, "趣味");
        assert!(row.answer.is_none());

        let empty = FaqRow::from_cells(&[]);
        assert_eq!(empty.keywords, "");
        assert!(empty.answer.is_none());
    }

    #[test]
    fn test_from_cells_non_string_values() {
        let row = FaqRow::from_cells(&[json!("年齢"), json!(42), json!("extra")]);
        assert_eq!(row.answer.as_deref(), Some("42"));
    }

    #[test]
    fn test_into_reply() {
        let fallbacks = Fallbacks::default();
        assert_eq!(
            MatchResult::Answer("hello".to_string()).into_reply(&fallbacks),
            "hello"
        );
        assert_eq!(
            MatchResult::NotUnderstood.into_reply(&fallbacks),
            fallbacks.not_understood
        );
        assert_eq!(MatchResult::NoMatch.into_reply(&fallbacks), fallbacks.no_match);
    }
}
