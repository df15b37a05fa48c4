//! Secret wrapper for the webhook URL.

/// A string that never appears in logs.
///
/// Slack incoming webhook URLs embed their own credentials, so the URL is
/// as sensitive as a token. `Debug` and `Display` always print
/// `[REDACTED]`.
///
/// ```
/// use alarm_relay::config::SecretString;
///
/// let url = SecretString::new("https://hooks.slack.com/services/T0/B0/abc".to_string());
/// assert_eq!(format!("{:?}", url), "[REDACTED]");
/// assert_eq!(url.expose(), "https://hooks.slack.com/services/T0/B0/abc");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        SecretString(s)
    }

    /// Exposes the underlying value. Never pass the result to a log macro.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}
