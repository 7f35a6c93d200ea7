//! FAQ Responder - Binary Entry Point
//!
//! Loads configuration, the tokenizer dictionary and the synonym table, then
//! serves the LINE webhook until Ctrl+C / SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use faq_responder::api::{create_router, AppState};
use faq_responder::config::Config;
use faq_responder::faq_source::{ServiceAccountAuth, SheetsFaqSource};
use faq_responder::gateway::LineClient;
use faq_responder::responder::FaqResponder;
use faq_responder::search::SynonymMap;
use faq_responder::tokenizer::{KeywordExtractor, VibratoAnalyzer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Any failure up to the bind is a configuration error: refuse to start
    let config = Config::from_env()?;

    let analyzer = VibratoAnalyzer::from_path(&config.dictionary_path)?;

    let synonyms = match &config.synonyms_path {
        Some(path) => SynonymMap::load(path)?,
        None => SynonymMap::builtin(),
    };
    info!(entries = synonyms.len(), "Loaded synonym table");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let auth = ServiceAccountAuth::from_json(http.clone(), &config.google_credentials_json)?;
    info!(client_email = %auth.client_email(), "Using service account");

    let source = SheetsFaqSource::new(
        http.clone(),
        config.sheets_api_base.clone(),
        config.sheet_id.clone(),
        config.faq_range.clone(),
        Arc::new(auth),
    );

    let gateway = LineClient::new(
        http,
        config.line_api_base.clone(),
        config.line_channel_access_token.clone(),
    );

    let responder = FaqResponder::new(
        KeywordExtractor::new(analyzer),
        Arc::new(synonyms),
        Arc::new(source),
        config.fallbacks.clone(),
    );

    let state = Arc::new(AppState::new(
        config.line_channel_secret.clone(),
        responder,
        Arc::new(gateway),
    ));
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, version = faq_responder::VERSION, "FAQ responder listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
