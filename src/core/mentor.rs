use super::Message;
use crate::constants::COMMUNICATION_FAILURE;
use async_trait::async_trait;

/// Failure of a turn as seen by the user, the underlying cause is not carried
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentorError {
    #[error("{}", COMMUNICATION_FAILURE)]
    Communication,
}

/// Anything that can answer a user turn: the gateway directly or a proxy in front of it
#[async_trait]
pub trait MentorClient: Send + Sync {
    /// Produces the mentor's reply to `input`.
    ///
    /// `history` holds the turns preceding `input`; implementations decide
    /// whether to transmit it. `name` is the user's display name, if known.
    async fn reply(
        &self,
        history: &[Message],
        input: &str,
        name: Option<&str>,
    ) -> Result<String, MentorError>;
}
