//! Configuration for alarm-relay.
//!
//! The only runtime input is the process environment: the destination
//! webhook URL and, optionally, the log format. Presentation tables live in
//! [`DisplayConfig`], built once at startup and passed by reference.

mod display;
mod env;
mod secret;

pub use display::{DisplayConfig, StateDisplay, TARGET_TIMEZONE};
pub use env::{ENV_LOG_FORMAT, ENV_SLACK_WEBHOOK, LogFormat, read_env};
pub use secret::SecretString;

use crate::error::ConfigError;

/// Process-wide configuration, loaded once before the runtime loop starts.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack incoming webhook URL (never logged).
    pub webhook_url: SecretString,
    /// Lookup tables and target zone used by the message builder.
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Fails fast when the webhook URL is missing so a misconfigured
    /// function never reaches its first invocation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = read_env(ENV_SLACK_WEBHOOK)
            .ok_or_else(|| ConfigError::MissingEnv(ENV_SLACK_WEBHOOK.to_string()))?;

        Ok(Self {
            webhook_url: SecretString::new(webhook_url),
            display: DisplayConfig::default(),
        })
    }
}
