use crate::config::GatewayConfig;
use crate::errors::Error;
use crate::llm::providers::gemini::GeminiProvider;
use crate::llm::providers::LlmProvider;
use crate::llm::ChatMessage;
use tracing::debug;

/// Generic LLM client that delegates work to a concrete provider.
#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

impl LlmClient {
    /// Creates a new LLM client with the specified provider and model.
    ///
    /// # Arguments
    /// * `provider_name` - Name of the LLM provider ("gemini")
    /// * `model` - Model name to use with the provider
    /// * `gateway` - Connection settings (base URL, timeout)
    /// * `temperature` - Sampling temperature, `None` to let the model decide
    pub fn new(
        provider_name: &str,
        model: &str,
        gateway: &GatewayConfig,
        temperature: Option<f32>,
    ) -> Result<Self, Error> {
        let provider: Box<dyn LlmProvider> = match provider_name {
            "gemini" => Box::new(GeminiProvider::new(model, gateway, temperature)?),
            _ => return Err(Error::UnknownProvider(provider_name.to_string())),
        };

        Ok(LlmClient { provider })
    }

    /// Wraps an already built provider.
    #[cfg(test)]
    pub fn from_provider(provider: Box<dyn LlmProvider>) -> Self {
        LlmClient { provider }
    }

    /// Calls the LLM and returns the reply text, `None` when nothing usable came back.
    pub async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, Error> {
        debug!("Sending {} messages to the gateway", messages.len());
        self.provider.call_llm_api(messages).await
    }
}
