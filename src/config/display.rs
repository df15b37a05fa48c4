//! Presentation tables: alarm state colors and labels, comparison
//! operator symbols, and the zone timestamps are rendered in.

use crate::alarm::AlarmState;
use std::collections::HashMap;

/// IANA zone every timestamp is converted to before display.
pub const TARGET_TIMEZONE: &str = "Asia/Seoul";

/// How one alarm state is shown in the chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDisplay {
    /// Slack attachment color (`good`, `warning`, `danger` or a hex code).
    pub color: String,
    /// Localized label shown in the state fields.
    pub label: String,
}

impl StateDisplay {
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }
}

/// Immutable lookup tables used while building a message.
///
/// Built once at startup and shared by reference. States and operators
/// missing from the tables render as empty strings rather than errors.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    states: HashMap<AlarmState, StateDisplay>,
    operators: HashMap<String, String>,
    timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let states = HashMap::from([
            (AlarmState::Alarm, StateDisplay::new("danger", "위험")),
            (
                AlarmState::InsufficientData,
                StateDisplay::new("warning", "데이터 부족"),
            ),
            (AlarmState::Ok, StateDisplay::new("good", "정상")),
        ]);

        let operators = [
            ("GreaterThanOrEqualToThreshold", ">="),
            ("GreaterThanThreshold", ">"),
            ("LessThanOrEqualToThreshold", "<="),
            // Older alarm tooling emitted this spelling.
            ("LowerThanOrEqualToThreshold", "<="),
            ("LessThanThreshold", "<"),
        ]
        .into_iter()
        .map(|(name, symbol)| (name.to_string(), symbol.to_string()))
        .collect();

        Self {
            states,
            operators,
            timezone: TARGET_TIMEZONE.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Build tables from explicit mappings.
    pub fn new(
        states: HashMap<AlarmState, StateDisplay>,
        operators: HashMap<String, String>,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            states,
            operators,
            timezone: timezone.into(),
        }
    }

    /// Replace the target zone, keeping the tables.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn state(&self, state: AlarmState) -> Option<&StateDisplay> {
        self.states.get(&state)
    }

    /// Attachment color for a state, empty when the state is unmapped.
    pub fn color(&self, state: AlarmState) -> &str {
        self.state(state).map_or("", |display| display.color.as_str())
    }

    /// Localized label for a state, empty when the state is unmapped.
    pub fn label(&self, state: AlarmState) -> &str {
        self.state(state).map_or("", |display| display.label.as_str())
    }

    /// Mathematical symbol for a CloudWatch comparison operator.
    pub fn operator_symbol(&self, operator: &str) -> &str {
        self.operators.get(operator).map_or("", String::as_str)
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}
