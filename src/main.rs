//! Main entry point for the application.
//!
//! Initializes logging, loads environment variables and configuration, then
//! either runs the terminal chat or serves the mentor proxy:
//! - `chat` talks to the gateway directly, or through a proxy with `--proxy-url`
//! - `serve` exposes `POST /api/chat`

mod api;
mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod llm;
mod ui;
mod utils;

use clap::Parser;
use cli::Command;
use config::{HistoryPolicy, MentorConfig};
use constants::GREETING;
use crate::core::{ChatMachine, ConversationSession, MentorClient, ProxyMentor, TerminalBell};
use errors::Error;
use llm::LlmClient;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables and configuration
/// 4. Run the selected command
#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let serving = matches!(cli.command, Command::Serve { .. });
    utils::init_logging(cli.effective_logging_level(), serving);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match config::load_optional_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: MentorConfig) -> Result<(), Error> {
    match command {
        Command::Serve { port } => {
            let llm_client = LlmClient::new(
                &config.gateway.provider,
                &config.proxy.model,
                &config.gateway,
                None,
            )?;
            let port = port.unwrap_or(config.server.port);
            info!("Starting mentor proxy on port {}", port);
            api::server::launch_server(port, llm_client).await
        }
        Command::Chat {
            proxy_url,
            name,
            contextual,
        } => {
            let client: Box<dyn MentorClient> = match proxy_url {
                Some(url) => {
                    info!("Routing turns through proxy {}", url);
                    Box::new(ProxyMentor::new(&url, config.gateway.timeout()?)?)
                }
                None => {
                    let policy = if contextual {
                        HistoryPolicy::Contextual
                    } else {
                        config.session.history_policy
                    };
                    let llm_client = LlmClient::new(
                        &config.gateway.provider,
                        &config.gateway.model,
                        &config.gateway,
                        Some(config.gateway.temperature),
                    )?;
                    Box::new(ConversationSession::new(llm_client, policy))
                }
            };

            let greeting = config.session.greeting.as_deref().unwrap_or(GREETING);
            let mut machine = ChatMachine::new(greeting, Box::new(TerminalBell));
            ui::run_chat(&mut machine, client.as_ref(), name.as_deref()).await;
            Ok(())
        }
    }
}
