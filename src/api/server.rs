use crate::api::routes;
use crate::errors::Error;
use crate::llm::LlmClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Starts and runs the proxy HTTP server
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `llm_client` - Gateway client used by every request
pub async fn launch_server(port: u16, llm_client: LlmClient) -> Result<(), Error> {
    let app = routes::app(Arc::new(llm_client));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Proxy listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
