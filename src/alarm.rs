//! CloudWatch alarm state-change payload.
//!
//! The payload arrives as the `Message` string of an SNS record. Decoding is
//! lenient about missing keys: absent strings become empty and absent numbers
//! become zero, so a sparse payload still produces a (possibly degenerate)
//! message. Only malformed JSON or mistyped values fail.
//!
//! The trigger shape is decided once here: a non-empty `Metrics` list means an
//! anomaly-detection band alarm, anything else is a threshold alarm.

use serde::{Deserialize, Deserializer};

/// Metric query id carrying the base metric of an anomaly band alarm.
pub const BASE_METRIC_ID: &str = "m1";

/// Metric query id carrying the `ANOMALY_DETECTION_BAND(...)` expression.
pub const BAND_EXPRESSION_ID: &str = "ad1";

/// Alarm state as reported by CloudWatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmState {
    Alarm,
    InsufficientData,
    Ok,
    /// Any value CloudWatch may add later, or an absent state.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A decoded alarm state-change event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAlarm")]
pub struct AlarmEvent {
    pub alarm_name: String,
    pub description: String,
    pub alarm_arn: String,
    pub old_state: AlarmState,
    pub new_state: AlarmState,
    /// ISO-8601 instant, e.g. `2022-06-01T12:08:19.123+0000`.
    pub state_change_time: String,
    pub trigger: Trigger,
}

impl AlarmEvent {
    /// Decode an alarm from the raw SNS message body.
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }
}

/// Evaluation window plus the condition that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    /// Number of periods evaluated.
    pub evaluation_periods: i64,
    /// Length of one period in seconds.
    pub period: i64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Static comparison against a fixed threshold.
    Threshold {
        metric_name: String,
        comparison_operator: String,
        threshold: f64,
    },
    /// Anomaly detection band around a base metric.
    ///
    /// Either piece is `None` when the matching metric query is absent.
    AnomalyBand {
        metric_name: Option<String>,
        band_expression: Option<String>,
    },
}

// Every non-`Option` field goes through `null_as_default`: a JSON `null`
// decodes like a missing key.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawAlarm {
    #[serde(deserialize_with = "null_as_default")]
    alarm_name: String,
    #[serde(deserialize_with = "null_as_default")]
    alarm_description: String,
    #[serde(deserialize_with = "null_as_default")]
    alarm_arn: String,
    #[serde(deserialize_with = "null_as_default")]
    new_state_value: AlarmState,
    #[serde(deserialize_with = "null_as_default")]
    old_state_value: AlarmState,
    #[serde(deserialize_with = "null_as_default")]
    state_change_time: String,
    #[serde(deserialize_with = "null_as_default")]
    trigger: RawTrigger,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawTrigger {
    #[serde(deserialize_with = "null_as_default")]
    metric_name: String,
    #[serde(deserialize_with = "null_as_default")]
    comparison_operator: String,
    #[serde(deserialize_with = "null_as_default")]
    threshold: f64,
    #[serde(deserialize_with = "null_as_default")]
    evaluation_periods: i64,
    #[serde(deserialize_with = "null_as_default")]
    period: i64,
    #[serde(deserialize_with = "null_as_default")]
    metrics: Vec<RawMetricQuery>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawMetricQuery {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    expression: Option<String>,
    metric_stat: Option<RawMetricStat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawMetricStat {
    #[serde(deserialize_with = "null_as_default")]
    metric: RawMetric,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct RawMetric {
    #[serde(deserialize_with = "null_as_default")]
    metric_name: String,
}

impl From<RawAlarm> for AlarmEvent {
    fn from(raw: RawAlarm) -> Self {
        Self {
            alarm_name: raw.alarm_name,
            description: raw.alarm_description,
            alarm_arn: raw.alarm_arn,
            old_state: raw.old_state_value,
            new_state: raw.new_state_value,
            state_change_time: raw.state_change_time,
            trigger: raw.trigger.into(),
        }
    }
}

impl From<RawTrigger> for Trigger {
    fn from(raw: RawTrigger) -> Self {
        let condition = if raw.metrics.is_empty() {
            Condition::Threshold {
                metric_name: raw.metric_name,
                comparison_operator: raw.comparison_operator,
                threshold: raw.threshold,
            }
        } else {
            let metric_name = raw
                .metrics
                .iter()
                .find(|query| query.id == BASE_METRIC_ID)
                .map(|query| {
                    query
                        .metric_stat
                        .as_ref()
                        .map(|stat| stat.metric.metric_name.clone())
                        .unwrap_or_default()
                });
            let band_expression = raw
                .metrics
                .iter()
                .find(|query| query.id == BAND_EXPRESSION_ID)
                .map(|query| query.expression.clone().unwrap_or_default());

            Condition::AnomalyBand {
                metric_name,
                band_expression,
            }
        };

        Self {
            evaluation_periods: raw.evaluation_periods,
            period: raw.period,
            condition,
        }
    }
}

/// Treats an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
