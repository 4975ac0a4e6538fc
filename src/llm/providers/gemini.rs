use super::LlmProvider;
use crate::config::GatewayConfig;
use crate::constants::{FALLBACK_API_KEY_VAR, GEMINI_API_KEY_VAR};
use crate::errors::Error;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

/// Provider implementation for the Gemini generative-language API
#[derive(Debug)]
pub struct GeminiProvider {
    /// Server-held credential, `None` when the environment lacks one
    api_key: Option<String>,
    /// Model identifier to use (e.g. "gemini-1.5-flash")
    model: String,
    /// Base URL of the API, without the version prefix
    base_url: String,
    /// Sampling temperature, omitted from the request when unset
    temperature: Option<f32>,
    client: Client,
}

impl GeminiProvider {
    /// Creates a provider reading its key from `GEMINI_API_KEY` (or `API_KEY`)
    ///
    /// A missing key is not an error here: every call will fail instead,
    /// so the caller sees it as a communication failure.
    pub fn new(model: &str, gateway: &GatewayConfig, temperature: Option<f32>) -> Result<Self, Error> {
        let api_key = std::env::var(GEMINI_API_KEY_VAR)
            .or_else(|_| std::env::var(FALLBACK_API_KEY_VAR))
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("{} is not set, gateway calls will fail", GEMINI_API_KEY_VAR);
        }
        Self::with_api_key(api_key, model, gateway, temperature)
    }

    pub fn with_api_key(
        api_key: Option<String>,
        model: &str,
        gateway: &GatewayConfig,
        temperature: Option<f32>,
    ) -> Result<Self, Error> {
        let client = Client::builder().timeout(gateway.timeout()?).build()?;
        Ok(GeminiProvider {
            api_key,
            model: model.to_string(),
            base_url: gateway.base_url.clone(),
            temperature,
            client,
        })
    }

    fn endpoint(&self, api_key: &str) -> Result<Url, Error> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut url =
            Url::parse(&base)?.join(&format!("v1beta/models/{}:generateContent", self.model))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

/// Maps chat messages onto the `generateContent` request body
///
/// Consecutive messages from the same side are folded into one content
/// entry, since the API expects user and model turns to alternate.
pub fn build_request_body(messages: &[ChatMessage], temperature: Option<f32>) -> Value {
    let (system_messages, turns): (Vec<_>, Vec<_>) =
        messages.iter().partition(|msg| msg.role == "system");

    let mut contents: Vec<Value> = Vec::new();
    for msg in turns {
        let role = if msg.role == "user" { "user" } else { "model" };
        let part = json!({ "text": msg.content });
        let same_side = contents.last().is_some_and(|last| last["role"] == role);
        if same_side {
            if let Some(parts) = contents.last_mut().and_then(|last| last["parts"].as_array_mut()) {
                parts.push(part);
            }
        } else {
            contents.push(json!({ "role": role, "parts": [part] }));
        }
    }

    let mut body = json!({ "contents": contents });
    if !system_messages.is_empty() {
        let parts = system_messages
            .iter()
            .map(|m| json!({ "text": m.content }))
            .collect::<Vec<_>>();
        body["systemInstruction"] = json!({ "parts": parts });
    }
    if let Some(temperature) = temperature {
        body["generationConfig"] = json!({ "temperature": temperature });
    }
    body
}

/// Pulls the reply out of `candidates[0].content.parts[*].text`
pub fn extract_reply(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<String>();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::MissingApiKey(GEMINI_API_KEY_VAR.to_string()))?;

        let request_body = build_request_body(&messages, self.temperature);

        let res = self
            .client
            .post(self.endpoint(api_key)?)
            .json(&request_body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await?;
            return Err(Error::Gateway {
                status: status.as_u16(),
                body: text,
            });
        }

        let json_resp: Value = res.json().await?;
        let reply = extract_reply(&json_resp);
        debug!("Gemini response: {:?}", reply);
        Ok(reply)
    }
}
