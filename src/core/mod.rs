//! Conversation core
//!
//! This module contains:
//! - The chat state machine driving the conversation
//! - Conversation messages
//! - The `MentorClient` seam and its two paths to the gateway (direct and proxied)
//! - Best-effort notifications emitted on each reply

mod chat;
mod mentor;
mod message;
mod notifier;
mod proxy_mentor;
mod session;

pub use chat::*;
pub use mentor::*;
pub use message::*;
pub use notifier::*;
pub use proxy_mentor::*;
pub use session::*;
