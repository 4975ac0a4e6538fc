use super::{MentorClient, MentorError, Message, Notifier};
use serde::Serialize;
use tracing::{debug, info};

/// UI-facing aggregate, handed to the renderer by reference
#[derive(Debug, Clone, Serialize)]
pub struct ChatState {
    /// Conversation order, append-only
    pub messages: Vec<Message>,
    /// True exactly while a send is in flight
    pub is_loading: bool,
    /// Last failure, cleared when a new send begins
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Sending,
    Error,
}

/// Input accepted by a submission, to be answered by a `MentorClient`
#[derive(Debug, Clone)]
pub struct PendingTurn {
    /// Messages that preceded the user's message
    pub history: Vec<Message>,
    /// Trimmed user text
    pub input: String,
}

/// Modifier keys held down while Enter was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

/// Drives a single chat: Idle -> Sending -> Idle | Error.
///
/// At most one turn is in flight; submissions made while sending are
/// dropped, not queued.
pub struct ChatMachine {
    state: ChatState,
    notifier: Box<dyn Notifier>,
}

impl ChatMachine {
    /// Creates a machine seeded with `greeting` as its first bot message
    pub fn new(greeting: &str, notifier: Box<dyn Notifier>) -> Self {
        ChatMachine {
            state: ChatState {
                messages: vec![Message::bot(greeting)],
                is_loading: false,
                error: None,
            },
            notifier,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn phase(&self) -> ChatPhase {
        if self.state.is_loading {
            ChatPhase::Sending
        } else if self.state.error.is_some() {
            ChatPhase::Error
        } else {
            ChatPhase::Idle
        }
    }

    /// Starts a turn.
    ///
    /// Returns `None` without touching the state when `text` is blank or a
    /// turn is already in flight.
    pub fn submit(&mut self, text: &str) -> Option<PendingTurn> {
        let input = text.trim();
        if input.is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }
        if self.state.is_loading {
            debug!("Ignoring submission while a reply is pending");
            return None;
        }

        let history = self.state.messages.clone();
        self.state.messages.push(Message::user(input));
        self.state.is_loading = true;
        self.state.error = None;

        Some(PendingTurn {
            history,
            input: input.to_string(),
        })
    }

    /// Finishes the in-flight turn with the mentor's answer or failure
    pub fn complete(&mut self, result: Result<String, MentorError>) {
        if !self.state.is_loading {
            debug!("Ignoring completion with no turn in flight");
            return;
        }
        self.state.is_loading = false;

        match result {
            Ok(reply) => {
                self.state.messages.push(Message::bot(reply));
                if let Err(e) = self.notifier.notify() {
                    debug!("Notification skipped: {}", e);
                }
            }
            Err(e) => {
                info!("Turn failed: {}", e);
                self.state.error = Some(e.to_string());
            }
        }
    }

    /// Asks `client` for the reply to `turn` and completes it
    pub async fn resolve(
        &mut self,
        turn: PendingTurn,
        client: &dyn MentorClient,
        name: Option<&str>,
    ) {
        let result = client.reply(&turn.history, &turn.input, name).await;
        self.complete(result);
    }

    /// Enter submits `draft`; a modified Enter only breaks the line and leaves the state alone
    pub fn on_enter(&mut self, modifiers: Modifiers, draft: &str) -> Option<PendingTurn> {
        if modifiers.any() {
            None
        } else {
            self.submit(draft)
        }
    }
}
