//! API routes configuration module

use crate::api::handlers::{chat, method_not_allowed};
use crate::llm::LlmClient;
use axum::{routing::post, Extension, Router};
use std::sync::Arc;

/// Creates the router exposing `POST /api/chat`
///
/// # Arguments
/// * `llm_client` - Gateway client shared across requests
pub fn app(llm_client: Arc<LlmClient>) -> Router {
    Router::new()
        .route("/api/chat", post(chat).fallback(method_not_allowed))
        .layer(Extension(llm_client))
}
