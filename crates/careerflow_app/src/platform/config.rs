use std::fs;
use std::path::Path;
use std::time::Duration;

use careerflow_client::{ClientSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "careerflow.ron";

/// Overrides `base_url` from the config file when set.
pub(crate) const API_BASE_ENV: &str = "CAREERFLOW_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: duration_ms(client.connect_timeout),
            request_timeout_ms: duration_ms(client.request_timeout),
            max_response_bytes: client.max_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        }
    }

    /// Applies the environment override; blank values are ignored.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|value| !value.trim().is_empty()) {
            self.base_url = base_url.trim().to_string();
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Reads the config file. A missing file is not an error and yields `None`.
pub(crate) fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_none() {
        let temp = TempDir::new().unwrap();
        let result = read_config(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(base_url: "https://jobs.example.com", log_destination: Terminal)"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap().unwrap();

        assert_eq!(config.base_url, "https://jobs.example.com");
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.request_timeout_ms, 30_000);
        let settings = config.client_settings();
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.max_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(base_url: ").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_override_wins_unless_blank() {
        let config = AppConfig::default()
            .with_base_url_override(Some(" http://10.0.0.5:8000 ".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.5:8000");

        let config = config.with_base_url_override(Some("   ".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.5:8000");

        let config = AppConfig::default().with_base_url_override(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
