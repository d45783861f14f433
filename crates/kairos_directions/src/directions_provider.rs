use async_trait::async_trait;
use jiff::Timestamp;
use kairos_core::travel_mode::TravelMode;
use serde::{Deserialize, Serialize};

use crate::error::DirectionsError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Departure {
    Now,
    At(Timestamp),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub departure: Departure,
    /// Ask for alternative routes on top of the recommended one
    pub alternatives: bool,
}

/// A duration or distance, both as displayed and as a raw value (seconds or
/// meters).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

impl TextValue {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DirectionsLeg {
    pub duration: TextValue,
    #[serde(default)]
    pub duration_in_traffic: Option<TextValue>,
    pub distance: TextValue,
}

impl DirectionsLeg {
    /// Duration relevant to `mode`: traffic-adjusted when driving, plain
    /// otherwise. Falls back to the plain duration when the service has no
    /// traffic estimate for the leg.
    pub fn duration_for(&self, mode: TravelMode) -> &TextValue {
        if mode.uses_traffic_model() {
            self.duration_in_traffic.as_ref().unwrap_or(&self.duration)
        } else {
            &self.duration
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRoute {
    pub summary: String,
    pub legs: Vec<DirectionsLeg>,
    pub overview_polyline: String,
}

#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Routes from the service, in the order it returned them. An empty list
    /// means the service found no route.
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError>;
}
