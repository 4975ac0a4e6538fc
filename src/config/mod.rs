mod parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::Error;

pub use parser::load_optional_config;

const DEFAULT_PROVIDER: &str = "gemini";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_SESSION_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_PROXY_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT: &str = "60s";
const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct MentorConfig {
    /// Connection to the model gateway
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Settings specific to the HTTP proxy
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Conversation behaviour of the terminal chat
    #[serde(default)]
    pub session: SessionConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Model gateway connection settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Provider name, only "gemini" is known
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the generative-language API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used by the direct conversation session
    #[serde(default = "default_session_model")]
    pub model: String,
    /// Sampling temperature for direct conversation calls
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Per-request timeout, humantime syntax ("30s", "2m")
    #[serde(default = "default_timeout")]
    pub request_timeout: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            provider: default_provider(),
            base_url: default_base_url(),
            model: default_session_model(),
            temperature: default_temperature(),
            request_timeout: default_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Parses `request_timeout` into a `Duration`
    pub fn timeout(&self) -> Result<Duration, Error> {
        humantime::parse_duration(&self.request_timeout)
            .map_err(|_| Error::InvalidTimeout(self.request_timeout.clone()))
    }
}

/// Proxy settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProxyConfig {
    /// Model used by the proxy endpoint
    #[serde(default = "default_proxy_model")]
    pub model: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            model: default_proxy_model(),
        }
    }
}

/// Whether prior turns are sent along with each new message
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPolicy {
    /// Every turn is sent on its own
    #[default]
    Independent,
    /// Prior turns are transmitted as conversation context
    Contextual,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub history_policy: HistoryPolicy,
    /// Replaces the seeded greeting when set
    #[serde(default)]
    pub greeting: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: default_port(),
        }
    }
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_session_model() -> String {
    DEFAULT_SESSION_MODEL.to_string()
}

fn default_proxy_model() -> String {
    DEFAULT_PROXY_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gateway_expectations() {
        let config = MentorConfig::default();
        assert_eq!(config.gateway.provider, "gemini");
        assert_eq!(config.gateway.model, "gemini-3-flash-preview");
        assert_eq!(config.proxy.model, "gemini-1.5-flash");
        assert_eq!(config.session.history_policy, HistoryPolicy::Independent);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.gateway.timeout().unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "gateway:\n  request_timeout: 2m\nsession:\n  history_policy: contextual\n";
        let config: MentorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.timeout().unwrap(), Duration::from_secs(120));
        assert_eq!(config.gateway.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.session.history_policy, HistoryPolicy::Contextual);
        assert!(config.session.greeting.is_none());
    }

    #[test]
    fn bad_timeout_is_reported() {
        let gateway = GatewayConfig {
            request_timeout: "soon".to_string(),
            ..GatewayConfig::default()
        };
        assert!(matches!(gateway.timeout(), Err(Error::InvalidTimeout(t)) if t == "soon"));
    }
}
