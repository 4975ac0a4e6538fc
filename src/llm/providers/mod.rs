use crate::errors::Error;
use crate::llm::ChatMessage;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod gemini;

#[async_trait]
pub trait LlmProvider: Debug + Send + Sync {
    /// Sends the messages and returns the generated text, `None` when the
    /// model answered without any usable text.
    async fn call_llm_api(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, Error>;
}
