use crate::errors::Error;
use crate::llm::providers::LlmProvider;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Serves `app` on an ephemeral local port for the rest of the test
pub async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Address of a local port nothing listens on anymore
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// What the fake gateway answers on every call
#[derive(Debug, Clone)]
pub enum Script {
    Text(String),
    Empty,
    Fail,
}

/// In-memory provider recording every request it receives
#[derive(Debug, Clone)]
pub struct FakeProvider {
    script: Script,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl FakeProvider {
    pub fn new(script: Script) -> Self {
        FakeProvider {
            script,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, Error> {
        self.calls.lock().unwrap().push(messages);
        match &self.script {
            Script::Text(text) => Ok(Some(text.clone())),
            Script::Empty => Ok(None),
            Script::Fail => Err(Error::Gateway {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}
