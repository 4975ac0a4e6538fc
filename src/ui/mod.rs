//! Terminal front end: renders the chat state and feeds user input to the machine

mod render;
mod repl;

pub use render::*;
pub use repl::*;
