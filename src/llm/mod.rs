mod llm_client;
mod message;
pub mod providers;

pub use llm_client::*;
pub use message::*;
