//! Google Sheets FAQ source

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{AccessTokenProvider, FaqSource};
use crate::types::{BotError, BotResult, FaqRow};

/// Response body of `spreadsheets.values.get`
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent when the range is empty
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Reads FAQ rows from a two-column A1 range (keywords, answer)
pub struct SheetsFaqSource {
    client: reqwest::Client,
    api_base: String,
    sheet_id: String,
    range: String,
    auth: Arc<dyn AccessTokenProvider>,
}

impl SheetsFaqSource {
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        sheet_id: impl Into<String>,
        range: impl Into<String>,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            sheet_id: sheet_id.into(),
            range: range.into(),
            auth,
        }
    }

    fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.sheet_id),
            urlencoding::encode(&self.range)
        )
    }
}

#[async_trait]
impl FaqSource for SheetsFaqSource {
    async fn fetch_rows(&self) -> BotResult<Vec<FaqRow>> {
        let token = self.auth.access_token().await?;
        let response = self
            .client
            .get(self.values_url())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::FaqSource(format!(
                "Sheets API returned {}: {}",
                status, body
            )));
        }

        let range: ValueRange = response.json().await?;
        debug!(rows = range.values.len(), range = %self.range, "Fetched FAQ table");

        Ok(range
            .values
            .iter()
            .map(|cells| FaqRow::from_cells(cells))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedToken;

    #[async_trait]
    impl AccessTokenProvider for FixedToken {
        async fn access_token(&self) -> BotResult<String> {
            Ok("test-token".to_string())
        }
    }

    struct FailingToken;

    #[async_trait]
    impl AccessTokenProvider for FailingToken {
        async fn access_token(&self) -> BotResult<String> {
            Err(BotError::Auth("no token".to_string()))
        }
    }

    fn source(api_base: String) -> SheetsFaqSource {
        SheetsFaqSource::new(
            reqwest::Client::new(),
            api_base,
            "sheet-1",
            "FAQ!A:B",
            Arc::new(FixedToken),
        )
    }

    #[test]
    fn test_values_url_encodes_range() {
        let source = source("https://sheets.example.com/".to_string());
        assert_eq!(
            source.values_url(),
            "https://sheets.example.com/v4/spreadsheets/sheet-1/values/FAQ%21A%3AB"
        );
    }

    #[tokio::test]
    async fn test_fetch_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/v4/spreadsheets/sheet-1/values/.+$"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "FAQ!A1:B3",
                "majorDimension": "ROWS",
                "values": [
                    ["画像 送信", "画像はこちら"],
                    ["趣味"],
                    ["年齢", 30]
                ]
            })))
            .mount(&server)
            .await;

        let rows = source(server.uri()).fetch_rows().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], FaqRow::new("画像 送信", "画像はこちら"));
        assert!(rows[1].answer.is_none());
        assert_eq!(rows[2].answer.as_deref(), Some("30"));
    }

    #[tokio::test]
    async fn test_empty_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "FAQ!A1:B1000",
                "majorDimension": "ROWS"
            })))
            .mount(&server)
            .await;

        assert!(source(server.uri()).fetch_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_error_is_faq_source_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
            .mount(&server)
            .await;

        let err = source(server.uri()).fetch_rows().await.unwrap_err();
        assert!(matches!(err, BotError::FaqSource(ref msg) if msg.contains("403")));
    }

    #[tokio::test]
    async fn test_token_failure_propagates() {
        let source = SheetsFaqSource::new(
            reqwest::Client::new(),
            "http://127.0.0.1:9",
            "sheet-1",
            "FAQ!A:B",
            Arc::new(FailingToken),
        );

        assert!(matches!(source.fetch_rows().await, Err(BotError::Auth(_))));
    }
}
