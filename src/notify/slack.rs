//! Slack incoming-webhook notifier.

use crate::config::SecretString;
use crate::error::NotifyError;
use crate::message::SlackMessage;
use crate::notify::Notifier;
use async_trait::async_trait;
use tracing::Instrument;

/// Posts messages to a Slack incoming webhook.
///
/// The request body is the serialized [`SlackMessage`] with
/// `Content-Type: application/json`. Non-2xx answers are logged at `warn`
/// and reported as success.
pub struct SlackNotifier {
    webhook_url: SecretString,
    /// HTTP client, reused across warm invocations.
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(webhook_url: SecretString, client: reqwest::Client) -> Self {
        Self {
            webhook_url,
            client,
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send(&self, message: &SlackMessage) -> Result<(), NotifyError> {
        let span = tracing::info_span!("send_slack", notifier_name = %self.name());

        async move {
            let response = self
                .client
                .post(self.webhook_url.expose())
                .json(message)
                .send()
                .await
                // The URL carries the webhook credentials.
                .map_err(|e| NotifyError::Transport(e.without_url()))?;

            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e.without_url(), "Failed to read webhook response body");
                    String::new()
                }
            };

            if status.is_success() {
                tracing::info!(status = %status, "Notification sent");
            } else {
                // TODO: surface non-2xx answers as errors once delivery failures
                // should trigger a Lambda retry.
                tracing::warn!(
                    status = %status,
                    response_body = %body,
                    "Webhook returned non-success status, treating as delivered"
                );
            }

            Ok::<(), NotifyError>(())
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for SlackNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackNotifier")
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}
