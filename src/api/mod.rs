//! HTTP API
//!
//! - `GET /` - Health check
//! - `POST /callback` - LINE webhook

pub mod http;
pub mod state;
pub mod webhook;

pub use http::create_router;
pub use state::AppState;
