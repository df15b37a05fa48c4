//! Environment variable access.

use crate::error::ConfigError;
use std::str::FromStr;

/// Environment variable holding the Slack incoming webhook URL.
pub const ENV_SLACK_WEBHOOK: &str = "SLACK_INCOMING_WEBHOOK";

/// Environment variable selecting the log output format.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Reads an environment variable, treating unset and blank values alike.
pub fn read_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// One JSON object per line, for CloudWatch Logs Insights.
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`, defaulting to text when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match read_env(ENV_LOG_FORMAT) {
            Some(value) => value.parse(),
            None => Ok(Self::default()),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}
