use crate::api::errors::{api_error, ApiError};
use crate::constants::{
    proxy_prompt, METHOD_NOT_ALLOWED, PROXY_CONNECTION_ERROR_REPLY, PROXY_SERVER_ERROR_REPLY,
};
use crate::core::{ProxyReply, ProxyRequest};
use crate::llm::{ChatMessage, LlmClient};
use axum::http::StatusCode;
use axum::body::Bytes;
use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::{error, info};

/// Forwards a prompt to the gateway wrapped in the mentor persona
///
/// The body is read as-is: a missing content type or an unreadable body
/// counts as an empty prompt from an unnamed user.
///
/// # Returns
/// * 200 with the first candidate's text, or the connection-error reply when there is none
/// * 500 with the server-error reply when the gateway call fails
#[axum::debug_handler]
pub async fn chat(
    Extension(llm_client): Extension<Arc<LlmClient>>,
    body: Bytes,
) -> (StatusCode, Json<ProxyReply>) {
    let payload: ProxyRequest = serde_json::from_slice(&body).unwrap_or_default();
    info!("Proxy request from '{}'", payload.name);
    let prompt = proxy_prompt(&payload.name, &payload.prompt);

    match llm_client.call_llm_api(vec![ChatMessage::user(&prompt)]).await {
        Ok(reply) => {
            let reply = reply.unwrap_or_else(|| PROXY_CONNECTION_ERROR_REPLY.to_string());
            (StatusCode::OK, Json(ProxyReply { reply }))
        }
        Err(e) => {
            error!("Proxy gateway call failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProxyReply {
                    reply: PROXY_SERVER_ERROR_REPLY.to_string(),
                }),
            )
        }
    }
}

/// Any method other than POST on the chat route
pub async fn method_not_allowed() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}
