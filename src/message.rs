//! Slack message document and the builder that produces it from an alarm.

use crate::alarm::AlarmEvent;
use crate::cause;
use crate::config::DisplayConfig;
use crate::error::BuildError;
use crate::link;
use crate::timestamp;
use serde::{Deserialize, Serialize};

/// Slack incoming-webhook payload with attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub title: String,
    pub color: String,
    pub fields: Vec<Field>,
}

/// One labeled value. `short` fields render side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub short: bool,
}

impl Field {
    fn long(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
            short: false,
        }
    }

    fn short(title: &str, value: String) -> Self {
        Self {
            title: title.to_string(),
            value,
            short: true,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SlackMessage {
    /// Serialize to the JSON body posted to the webhook.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Turns raw alarm payloads into [`SlackMessage`]s.
///
/// Holds only a reference to the display tables, so building is a pure
/// function of its input.
#[derive(Debug, Clone, Copy)]
pub struct MessageBuilder<'a> {
    display: &'a DisplayConfig,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(display: &'a DisplayConfig) -> Self {
        Self { display }
    }

    /// Decode `raw` and build the message for it.
    ///
    /// # Errors
    ///
    /// * [`BuildError::Decode`] - `raw` is not an alarm payload
    /// * [`BuildError::TimeParse`] / [`BuildError::LocationLoad`] - the
    ///   state change time cannot be localized
    pub fn build(&self, raw: &[u8]) -> Result<SlackMessage, BuildError> {
        let alarm = AlarmEvent::from_slice(raw)?;
        self.build_from_alarm(&alarm)
    }

    /// Build the message for an already decoded alarm.
    ///
    /// Field order is fixed: When, Desc, Cause, Prev State, Curr State, Link.
    pub fn build_from_alarm(&self, alarm: &AlarmEvent) -> Result<SlackMessage, BuildError> {
        let when = timestamp::localize(&alarm.state_change_time, self.display.timezone())?;

        let fields = vec![
            Field::long("When", when),
            Field::long("Desc", alarm.description.clone()),
            Field::long("Cause", cause::describe(&alarm.trigger, self.display)),
            Field::short("Prev State", self.display.label(alarm.old_state).to_string()),
            Field::short("Curr State", self.display.label(alarm.new_state).to_string()),
            Field::long(
                "Link",
                link::console_url(&alarm.alarm_arn, &alarm.alarm_name),
            ),
        ];

        Ok(SlackMessage {
            attachments: vec![Attachment {
                title: alarm.alarm_name.clone(),
                color: self.display.color(alarm.new_state).to_string(),
                fields,
            }],
        })
    }
}
