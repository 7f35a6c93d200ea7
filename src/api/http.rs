//! HTTP server setup with Axum

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::webhook::handle_callback;

/// Preflight responses may be cached for 12 hours
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    Router::new()
        // Health check
        .route("/", get(health_check))
        // LINE webhook
        .route("/callback", post(handle_callback))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "message": "connection success" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::faq_source::StaticFaqSource;
    use crate::gateway::ReplySender;
    use crate::responder::FaqResponder;
    use crate::search::SynonymMap;
    use crate::tokenizer::{KeywordExtractor, Morpheme, MorphologicalAnalyzer};
    use crate::types::{BotResult, Fallbacks};

    struct NoopAnalyzer;

    impl MorphologicalAnalyzer for NoopAnalyzer {
        fn analyze(&self, _text: &str) -> Vec<Morpheme> {
            Vec::new()
        }
    }

    struct NoopGateway;

    #[async_trait]
    impl ReplySender for NoopGateway {
        async fn reply_text(&self, _reply_token: &str, _text: &str) -> BotResult<()> {
            Ok(())
        }
    }

    fn test_state() -> Arc<AppState> {
        let responder = FaqResponder::new(
            KeywordExtractor::new(NoopAnalyzer),
            Arc::new(SynonymMap::new()),
            Arc::new(StaticFaqSource::default()),
            Fallbacks::default(),
        );
        Arc::new(AppState::new("secret", responder, Arc::new(NoopGateway)))
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "connection success");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/callback")
                    .header("origin", "https://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
        assert_eq!(response.headers()["access-control-max-age"], "43200");
    }

    #[tokio::test]
    async fn test_callback_requires_post() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/callback").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
