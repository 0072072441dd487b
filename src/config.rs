use std::path::PathBuf;

use crate::error::{BoardError, Result};

/// Ticket feed the board reads from unless told otherwise
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Directory, relative to the working directory, holding saved preferences
pub const DEFAULT_PREFERENCES_DIR: &str = ".ticket-board";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub endpoint: String,
    pub preferences_dir: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            preferences_dir: PathBuf::from(DEFAULT_PREFERENCES_DIR),
        }
    }
}

impl BoardConfig {
    /// Builds a config from optional overrides, keeping defaults for the rest
    pub fn from_overrides(endpoint: Option<String>, preferences_dir: Option<PathBuf>) -> Result<Self> {
        let defaults = Self::default();
        let endpoint = endpoint.unwrap_or(defaults.endpoint);

        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(BoardError::ConfigError(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }

        Ok(Self {
            endpoint,
            preferences_dir: preferences_dir.unwrap_or(defaults.preferences_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::from_overrides(None, None).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_overrides() {
        let config = BoardConfig::from_overrides(
            Some("http://localhost:8080/tickets".to_string()),
            Some(PathBuf::from("/tmp/prefs")),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/tickets");
        assert_eq!(config.preferences_dir, PathBuf::from("/tmp/prefs"));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let result = BoardConfig::from_overrides(Some("ftp://example.com".to_string()), None);
        assert!(matches!(result, Err(BoardError::ConfigError(_))));
    }
}
