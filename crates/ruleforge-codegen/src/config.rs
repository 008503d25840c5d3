//! Rule-engine configuration fragment registered into the aggregate
//! application configuration.

use serde::{Deserialize, Serialize};

/// Event-processing mode the generated model is configured for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventProcessing {
    #[default]
    Cloud,
    Stream,
}

/// Clock the rule engine's sessions run on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockType {
    #[default]
    Realtime,
    Pseudo,
}

/// The configuration fragment this stage contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub event_processing: EventProcessing,
    pub clock_type: ClockType,
}

impl RuleConfig {
    /// Render the fragment as the JSON value the aggregate generator embeds.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// The surrounding pipeline's aggregate configuration generator, seen from
/// this stage: a single registration call, no return value.
pub trait ConfigAggregator {
    fn register_rule_config(&mut self, config: RuleConfig);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_config_serializes_with_defaults() {
        let json = RuleConfig::default().to_value().unwrap();
        assert_eq!(json["event_processing"], "cloud");
        assert_eq!(json["clock_type"], "realtime");
    }
}
