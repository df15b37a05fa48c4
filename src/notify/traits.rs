//! Notifier trait definition.

use crate::error::NotifyError;
use crate::message::SlackMessage;
use async_trait::async_trait;

/// Destination for a built chat message.
///
/// Implementations must be `Send + Sync` so one instance can serve every
/// invocation handled by the runtime.
///
/// # Example
///
/// ```ignore
/// use alarm_relay::notify::Notifier;
///
/// struct StdoutNotifier;
///
/// #[async_trait]
/// impl Notifier for StdoutNotifier {
///     fn name(&self) -> &str { "stdout" }
///     async fn send(&self, message: &SlackMessage) -> Result<(), NotifyError> {
///         println!("{:?}", message);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name used in log spans (e.g. "slack").
    fn name(&self) -> &str;

    /// Deliver `message` with exactly one attempt.
    ///
    /// * `Ok(())` - the endpoint answered, whatever the status code
    /// * `Err(NotifyError::Transport)` - no response was received
    async fn send(&self, message: &SlackMessage) -> Result<(), NotifyError>;
}

impl std::fmt::Debug for dyn Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("name", &self.name())
            .finish()
    }
}
