#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} environment variable not set")]
    MissingApiKey(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gateway error ({status}): {body}")]
    Gateway { status: u16, body: String },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid timeout '{0}'")]
    InvalidTimeout(String),
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),
}
