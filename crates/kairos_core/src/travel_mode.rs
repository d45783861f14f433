use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [
        TravelMode::Driving,
        TravelMode::Walking,
        TravelMode::Bicycling,
    ];

    /// Only driving routes carry a traffic-adjusted duration.
    pub fn uses_traffic_model(&self) -> bool {
        matches!(self, TravelMode::Driving)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelMode::Driving => "Driving",
            TravelMode::Walking => "Walking",
            TravelMode::Bicycling => "Bicycling",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| RouteError::UnknownTravelMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.to_string().parse::<TravelMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode() {
        assert!("transit".parse::<TravelMode>().is_err());
        assert!("Driving".parse::<TravelMode>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let mode: TravelMode = serde_json::from_str("\"bicycling\"").unwrap();
        assert_eq!(mode, TravelMode::Bicycling);
        assert_eq!(
            serde_json::to_string(&TravelMode::Walking).unwrap(),
            "\"walking\""
        );
    }

    #[test]
    fn test_traffic_model() {
        assert!(TravelMode::Driving.uses_traffic_model());
        assert!(!TravelMode::Walking.uses_traffic_model());
        assert!(!TravelMode::Bicycling.uses_traffic_model());
    }
}
