use super::{MentorClient, MentorError, Message};
use crate::constants::DEFAULT_USER_NAME;
use crate::errors::Error;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// Body accepted by `POST /api/chat`
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProxyRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub name: String,
}

/// Body returned by `POST /api/chat` on success and on server failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ProxyReply {
    pub reply: String,
}

/// Server-mediated path: the credential stays with the proxy.
#[derive(Debug)]
pub struct ProxyMentor {
    url: String,
    client: Client,
}

impl ProxyMentor {
    /// # Arguments
    /// * `url` - Full URL of the proxy endpoint, e.g. "http://localhost:3000/api/chat"
    /// * `timeout` - Per-request timeout
    pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
        url::Url::parse(url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(ProxyMentor {
            url: url.to_string(),
            client,
        })
    }

    async fn call(&self, request: &ProxyRequest) -> Result<String, Error> {
        let res = self.client.post(&self.url).json(request).send().await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await?;
            return Err(Error::Gateway {
                status: status.as_u16(),
                body: text,
            });
        }

        let body: ProxyReply = res.json().await?;
        Ok(body.reply)
    }
}

#[async_trait]
impl MentorClient for ProxyMentor {
    async fn reply(
        &self,
        _history: &[Message],
        input: &str,
        name: Option<&str>,
    ) -> Result<String, MentorError> {
        let request = ProxyRequest {
            prompt: input.to_string(),
            name: name.unwrap_or(DEFAULT_USER_NAME).to_string(),
        };

        self.call(&request).await.map_err(|e| {
            error!("Proxy error: {}", e);
            MentorError::Communication
        })
    }
}
