//! alarm-relay - CloudWatch alarm notifications from SNS to Slack.

pub mod alarm;
pub mod cause;
pub mod config;
pub mod error;
pub mod handler;
pub mod link;
pub mod message;
pub mod notify;
pub mod timestamp;

// Re-export commonly used types
pub use alarm::{AlarmEvent, AlarmState, Condition, Trigger};
pub use config::{Config, DisplayConfig, LogFormat};
pub use handler::{AlarmHandler, Status, function_handler};
pub use message::{MessageBuilder, SlackMessage};
pub use notify::{Notifier, SlackNotifier};
