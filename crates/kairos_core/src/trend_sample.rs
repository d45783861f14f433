use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Predicted travel time when departing at `timestamp` ("HH:MM").
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct TrendSample {
    pub timestamp: String,
    pub eta_minutes: f64,
}

impl TrendSample {
    pub fn new(timestamp: impl Into<String>, eta_minutes: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            eta_minutes,
        }
    }
}
