use crate::core::{ChatState, Message, Role};
use colored::*;

/// Formats one message as a labelled, timestamped line
pub fn render_message(message: &Message) -> String {
    let time = message.timestamp.format("%H:%M").to_string();
    let label = match message.role {
        Role::User => "Você".bold().blue(),
        Role::Bot => "MOVE".bold().cyan(),
    };
    format!("{} {} {}", time.dimmed(), label, message.content)
}

/// Renders messages from index `from` onwards
pub fn render_since(state: &ChatState, from: usize) -> Vec<String> {
    state
        .messages
        .iter()
        .skip(from)
        .map(render_message)
        .collect()
}

/// Formats the failure of the last turn
pub fn render_error(error: &str) -> String {
    format!("⚠ {}", error).red().to_string()
}
