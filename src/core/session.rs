use super::{MentorClient, MentorError, Message, Role};
use crate::config::HistoryPolicy;
use crate::constants::{FALLBACK_REPLY, MENTOR_SYSTEM_INSTRUCTION};
use crate::llm::{ChatMessage, LlmClient};
use async_trait::async_trait;
use tracing::{debug, error};

/// Direct path to the gateway: persona instruction plus the user's input.
#[derive(Debug)]
pub struct ConversationSession {
    llm_client: LlmClient,
    policy: HistoryPolicy,
}

impl ConversationSession {
    pub fn new(llm_client: LlmClient, policy: HistoryPolicy) -> Self {
        ConversationSession { llm_client, policy }
    }

    /// Assembles the messages for one call.
    ///
    /// With `HistoryPolicy::Contextual` prior turns are included, minus any
    /// bot messages before the first user turn (the seeded greeting).
    pub fn build_messages(&self, history: &[Message], input: &str) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(MENTOR_SYSTEM_INSTRUCTION)];

        if self.policy == HistoryPolicy::Contextual {
            messages.extend(
                history
                    .iter()
                    .skip_while(|m| m.role == Role::Bot)
                    .map(|m| match m.role {
                        Role::User => ChatMessage::user(&m.content),
                        Role::Bot => ChatMessage::assistant(&m.content),
                    }),
            );
        }

        messages.push(ChatMessage::user(input));
        messages
    }
}

#[async_trait]
impl MentorClient for ConversationSession {
    async fn reply(
        &self,
        history: &[Message],
        input: &str,
        _name: Option<&str>,
    ) -> Result<String, MentorError> {
        let messages = self.build_messages(history, input);
        debug!("Conversation call with {} messages", messages.len());

        match self.llm_client.call_llm_api(messages).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Ok(FALLBACK_REPLY.to_string()),
            Err(e) => {
                error!("Gemini API error: {}", e);
                Err(MentorError::Communication)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GREETING;
    use crate::config::GatewayConfig;
    use crate::llm::providers::gemini::{build_request_body, GeminiProvider};
    use crate::utils::testing::{closed_addr, FakeProvider, Script};

    fn session(script: Script, policy: HistoryPolicy) -> (ConversationSession, FakeProvider) {
        let provider = FakeProvider::new(script);
        let client = LlmClient::from_provider(Box::new(provider.clone()));
        (ConversationSession::new(client, policy), provider)
    }

    fn history() -> Vec<Message> {
        vec![
            Message::bot(GREETING),
            Message::user("Oi"),
            Message::bot("Olá, irmão"),
        ]
    }

    #[tokio::test]
    async fn returns_gateway_text_exactly() {
        let (session, provider) = session(Script::Text("Ore sem cessar.".into()), HistoryPolicy::Independent);
        let reply = session.reply(&history(), "Como orar?", None).await.unwrap();
        assert_eq!(reply, "Ore sem cessar.");

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0], ChatMessage::system(MENTOR_SYSTEM_INSTRUCTION));
        assert_eq!(calls[0][1], ChatMessage::user("Como orar?"));
        assert_eq!(calls[0].len(), 2);
    }

    #[tokio::test]
    async fn empty_reply_becomes_fallback() {
        let (session, _) = session(Script::Empty, HistoryPolicy::Independent);
        let reply = session.reply(&[], "Oi", None).await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn failure_is_generic() {
        let (session, _) = session(Script::Fail, HistoryPolicy::Independent);
        let err = session.reply(&[], "Oi", None).await.unwrap_err();
        assert_eq!(err, MentorError::Communication);
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn unreachable_gateway_is_communication_failure() {
        let gateway = GatewayConfig {
            base_url: format!("http://{}", closed_addr().await),
            request_timeout: "5s".to_string(),
            ..GatewayConfig::default()
        };
        let provider = GeminiProvider::with_api_key(
            Some("secret".to_string()),
            &gateway.model,
            &gateway,
            Some(gateway.temperature),
        )
        .unwrap();
        let session = ConversationSession::new(
            LlmClient::from_provider(Box::new(provider)),
            HistoryPolicy::Independent,
        );

        let err = session.reply(&history(), "Como orar?", None).await.unwrap_err();
        assert_eq!(err, MentorError::Communication);
    }

    #[test]
    fn failed_turn_in_history_still_alternates_on_the_wire() {
        let (session, _) = session(Script::Empty, HistoryPolicy::Contextual);
        let history = vec![Message::bot(GREETING), Message::user("Oi")];
        let messages = session.build_messages(&history, "Oi de novo");

        let body = build_request_body(&messages, None);
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn contextual_policy_sends_prior_turns_without_greeting() {
        let (session, _) = session(Script::Empty, HistoryPolicy::Contextual);
        let messages = session.build_messages(&history(), "E agora?");
        let roles = messages.iter().map(|m| m.role.as_str()).collect::<Vec<_>>();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(messages[1].content, "Oi");
        assert_eq!(messages[3].content, "E agora?");
    }

    #[test]
    fn greeting_only_history_sends_single_turn() {
        let (session, _) = session(Script::Empty, HistoryPolicy::Contextual);
        let messages = session.build_messages(&[Message::bot(GREETING)], "Oi");
        assert_eq!(messages.len(), 2);
    }
}
