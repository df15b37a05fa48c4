//! Centralized error types for alarm-relay using thiserror.
//!
//! Every fatal condition is returned as a value up to the invocation
//! boundary; nothing in the library aborts the process.

use thiserror::Error;

/// Errors related to environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingEnv(String),
    #[error("invalid log format '{0}': expected 'text' or 'json'")]
    InvalidLogFormat(String),
}

/// Errors raised while turning an alarm payload into a chat message.
///
/// No partial message is ever produced when one of these is returned.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("invalid alarm payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid state change time '{input}': {source}")]
    TimeParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("failed to load time zone '{0}'")]
    LocationLoad(String),
}

/// Errors related to webhook delivery.
///
/// Only transport failures are errors; any HTTP status counts as delivered.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors surfaced to the invocation harness.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("event contained no records")]
    NoRecords,
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingEnv("SLACK_INCOMING_WEBHOOK".to_string());
        assert_eq!(
            err.to_string(),
            "environment variable SLACK_INCOMING_WEBHOOK is not set"
        );

        let err = ConfigError::InvalidLogFormat("xml".to_string());
        assert_eq!(
            err.to_string(),
            "invalid log format 'xml': expected 'text' or 'json'"
        );
    }

    #[test]
    fn build_error_decode_display() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = BuildError::from(source);
        assert!(err.to_string().starts_with("invalid alarm payload: "));
    }

    #[test]
    fn build_error_time_parse_display() {
        let source = chrono::DateTime::parse_from_rfc3339("yesterday").unwrap_err();
        let err = BuildError::TimeParse {
            input: "yesterday".to_string(),
            source,
        };
        assert!(
            err.to_string()
                .starts_with("invalid state change time 'yesterday': ")
        );
    }

    #[test]
    fn build_error_location_load_display() {
        let err = BuildError::LocationLoad("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "failed to load time zone 'Mars/Olympus'");
    }

    #[test]
    fn handler_error_display() {
        assert_eq!(
            HandlerError::NoRecords.to_string(),
            "event contained no records"
        );

        let err = HandlerError::Build(BuildError::LocationLoad("Nowhere".to_string()));
        assert_eq!(
            err.to_string(),
            "build error: failed to load time zone 'Nowhere'"
        );
    }
}
