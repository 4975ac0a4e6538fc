use clap::{Parser, Subcommand};

/// Command line interface for the application
#[derive(Parser)]
#[command(name = "move-mentor", about = "MOVE, a Christian mentor chat")]
pub struct Cli {
    /// Path to an optional YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "warn" for chat, "info" for serve
    #[arg(long, global = true)]
    pub logging_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Talk to the mentor from the terminal
    Chat {
        /// Route every turn through a running proxy instead of calling the gateway directly
        #[arg(long)]
        proxy_url: Option<String>,

        /// Name sent to the proxy along with each prompt
        #[arg(long)]
        name: Option<String>,

        /// Send prior turns with every message
        #[arg(long)]
        contextual: bool,
    },
    /// Run the HTTP proxy exposing POST /api/chat
    Serve {
        /// Port to listen on, overrides the configuration file
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Log level to install, falling back to a per-command default
    pub fn effective_logging_level(&self) -> &str {
        match (&self.logging_level, &self.command) {
            (Some(level), _) => level,
            (None, Command::Chat { .. }) => "warn",
            (None, Command::Serve { .. }) => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chat_with_proxy() {
        let cli = Cli::try_parse_from([
            "move-mentor",
            "chat",
            "--proxy-url",
            "http://localhost:3000/api/chat",
            "--name",
            "Ana",
        ])
        .unwrap();
        assert!(cli.logging_level.is_none());
        assert_eq!(cli.effective_logging_level(), "warn");
        match cli.command {
            Command::Chat {
                proxy_url,
                name,
                contextual,
            } => {
                assert_eq!(proxy_url.as_deref(), Some("http://localhost:3000/api/chat"));
                assert_eq!(name.as_deref(), Some("Ana"));
                assert!(!contextual);
            }
            _ => panic!("expected chat"),
        }
    }

    #[test]
    fn parses_serve_with_global_flags() {
        let cli = Cli::try_parse_from([
            "move-mentor",
            "serve",
            "--port",
            "8080",
            "--logging-level",
            "debug",
            "--config",
            "mentor.yaml",
        ])
        .unwrap();
        assert_eq!(cli.logging_level.as_deref(), Some("debug"));
        assert_eq!(cli.config.as_deref(), Some("mentor.yaml"));
        assert!(matches!(cli.command, Command::Serve { port: Some(8080) }));
    }
}
