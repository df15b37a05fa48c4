//! alarm-relay - CloudWatch alarm notifications from SNS to Slack.

use std::sync::Arc;

use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{LambdaEvent, service_fn};
use tracing::{error, info};

use alarm_relay::config::{Config, LogFormat};
use alarm_relay::{AlarmHandler, SlackNotifier, function_handler};

/// Initialize the tracing subscriber with the specified log format.
///
/// Timestamps are omitted because CloudWatch Logs adds its own ingestion time.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .without_time()
                .with_env_filter(filter)
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let log_format = LogFormat::from_env();
    init_logging(log_format.as_ref().copied().unwrap_or_default());
    if let Err(e) = log_format {
        error!(error = %e, "Invalid logging configuration");
        std::process::exit(1);
    }

    // Fail fast: a missing webhook must not reach the first invocation
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(timezone = %config.display.timezone(), "alarm-relay starting");

    // One client for the lifetime of the execution environment
    let client = reqwest::Client::new();
    let notifier = Arc::new(SlackNotifier::new(config.webhook_url, client));
    let handler = AlarmHandler::new(config.display, notifier);

    let handler = &handler;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        function_handler(handler, event).await
    }))
    .await
}
