//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Path of the YAML file read when `STOREFRONT_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/storefront.yaml";

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Settings shared by the API client and the renderers.
pub struct ClientConfig {
    /// Origin (optionally with a path prefix) of the inventory API.
    pub api_base: String,
    /// Per-request timeout; requests wait indefinitely when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// `chrono` format used for timestamps shown to the user.
    pub timestamp_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Loads the configuration from an optional YAML file, overlaid with
/// `STOREFRONT_*` environment variables.
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientConfig, ConfigError> {
    let path = path.as_ref().to_string_lossy();
    Config::builder()
        .set_default("api_base", DEFAULT_API_BASE)?
        .set_default("timestamp_format", DEFAULT_TIMESTAMP_FORMAT)?
        .add_source(File::new(&path, FileFormat::Yaml).required(false))
        .add_source(Environment::with_prefix("STOREFRONT").try_parsing(true))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn reads_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "api_base: http://inventory.local:9000/api").unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();
        writeln!(file, "timestamp_format: \"%d.%m.%Y\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.timestamp_format, "%d.%m.%Y");
    }
}
