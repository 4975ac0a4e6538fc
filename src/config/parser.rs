use super::MentorConfig;
use crate::errors::Error;
use std::fs;

use tracing::info;

/// Loads and parses the mentor configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML does not
/// describe a `MentorConfig`
pub fn load_config(file_path: &str) -> Result<MentorConfig, Error> {
    let yaml_str = fs::read_to_string(file_path)?;
    let config: MentorConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded configuration from {}", file_path);
    Ok(config)
}

/// Loads the file when a path was given, defaults otherwise
pub fn load_optional_config(file_path: Option<&str>) -> Result<MentorConfig, Error> {
    match file_path {
        Some(path) => load_config(path),
        None => Ok(MentorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config("/nonexistent/move-mentor.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn reads_yaml_from_disk() {
        let path = std::env::temp_dir().join(format!("move-mentor-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, "server:\n  port: 8081\nproxy:\n  model: gemini-2.0-flash\n").unwrap();
        let config = load_config(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.proxy.model, "gemini-2.0-flash");
    }

    #[test]
    fn no_path_means_defaults() {
        let config = load_optional_config(None).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
