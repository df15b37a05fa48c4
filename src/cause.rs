//! Human-readable description of why an alarm fired.

use crate::alarm::{Condition, Trigger};
use crate::config::DisplayConfig;

/// Describe the trigger, e.g. `1 분 동안 1 회 | NetworkOut > 0`.
///
/// The prefix states the evaluation window: total minutes and the number of
/// periods. The rest depends on the trigger shape. Unknown operators and
/// missing band queries render as empty segments.
pub fn describe(trigger: &Trigger, display: &DisplayConfig) -> String {
    let minutes = trigger.period.div_euclid(60);
    // Payload values are unbounded; the total wraps instead of panicking.
    let window = format!(
        "{} 분 동안 {} 회",
        trigger.evaluation_periods.wrapping_mul(minutes),
        trigger.evaluation_periods
    );

    match &trigger.condition {
        Condition::Threshold {
            metric_name,
            comparison_operator,
            threshold,
        } => format!(
            "{} | {} {} {}",
            window,
            metric_name,
            display.operator_symbol(comparison_operator),
            // Saturating truncation toward zero.
            *threshold as i64
        ),
        Condition::AnomalyBand {
            metric_name,
            band_expression,
        } => format!(
            "{} | {} 지표의 범위(약 {} 배)를 벗어났습니다.",
            window,
            metric_name.as_deref().unwrap_or_default(),
            band_expression.as_deref().map(band_width).unwrap_or_default()
        ),
    }
}

/// Extract the width multiplier from `ANOMALY_DETECTION_BAND(m1, 3)`.
///
/// Takes the second comma-separated argument and strips every `)` and
/// whitespace character. Returns an empty string without a second argument.
pub fn band_width(expression: &str) -> String {
    expression
        .split(',')
        .nth(1)
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ')' && !c.is_whitespace())
        .collect()
}
