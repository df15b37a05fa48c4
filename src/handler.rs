//! Invocation boundary: one SNS event in, one chat message out.

use crate::alarm::AlarmEvent;
use crate::config::DisplayConfig;
use crate::error::{BuildError, HandlerError};
use crate::message::MessageBuilder;
use crate::notify::Notifier;
use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::LambdaEvent;
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// Outcome reported to the invoking runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::Failed => "Failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relays alarm notifications to a [`Notifier`].
///
/// Created once per process and shared by every invocation.
#[derive(Debug)]
pub struct AlarmHandler {
    display: DisplayConfig,
    notifier: Arc<dyn Notifier>,
}

impl AlarmHandler {
    pub fn new(display: DisplayConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self { display, notifier }
    }

    /// Relay the first record of `event`.
    ///
    /// Additional records are logged and ignored; SNS delivers one message
    /// per Lambda invocation, so more than one indicates a misrouted event.
    pub async fn handle(&self, event: &SnsEvent) -> Result<Status, HandlerError> {
        let mut records = event.records.iter();
        let first = records.next().ok_or(HandlerError::NoRecords)?;

        let ignored = records.count();
        if ignored > 0 {
            tracing::warn!(
                ignored_records = ignored,
                "Event carried more than one record, relaying only the first"
            );
        }

        self.relay(first.sns.message.as_bytes()).await
    }

    /// Build the chat message for one raw alarm payload and send it.
    ///
    /// Nothing is sent when building fails. Everything after decoding runs
    /// inside a `relay_alarm` span carrying the alarm name.
    pub async fn relay(&self, raw: &[u8]) -> Result<Status, HandlerError> {
        let alarm = AlarmEvent::from_slice(raw).map_err(BuildError::from)?;

        let span = tracing::info_span!(
            "relay_alarm",
            alarm_name = %alarm.alarm_name,
            notifier_name = %self.notifier.name()
        );

        async {
            let message = match MessageBuilder::new(&self.display).build_from_alarm(&alarm) {
                Ok(message) => message,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to build message");
                    return Err(HandlerError::Build(e));
                }
            };

            self.notifier.send(&message).await?;
            Ok::<Status, HandlerError>(Status::Done)
        }
        .instrument(span)
        .await
    }
}

/// Lambda entry point wrapping [`AlarmHandler::handle`].
///
/// Returns the status string on success. On failure the error is logged
/// with `status = "Failed"` and handed back to the runtime, which records
/// the invocation as failed.
pub async fn function_handler(
    handler: &AlarmHandler,
    event: LambdaEvent<SnsEvent>,
) -> Result<String, lambda_runtime::Error> {
    let request_id = event.context.request_id.clone();

    match handler.handle(&event.payload).await {
        Ok(status) => {
            tracing::info!(request_id = %request_id, status = %status, "Invocation complete");
            Ok(status.to_string())
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                status = %Status::Failed,
                error = %e,
                "Invocation failed"
            );
            Err(e.into())
        }
    }
}
