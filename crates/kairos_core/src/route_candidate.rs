use schemars::JsonSchema;
use serde::Serialize;

use crate::{distance::parse_distance_km, eta::parse_eta_minutes};

/// One route proposed by the directions service.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    eta_text: String,
    eta_minutes: u32,
    distance_text: String,
    distance_km: Option<f64>,
    /// Encoded polyline of the whole route
    polyline: String,
    label: String,
}

impl RouteCandidate {
    pub fn new(
        eta_text: impl Into<String>,
        distance_text: impl Into<String>,
        polyline: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let eta_text = eta_text.into();
        let distance_text = distance_text.into();

        Self {
            eta_minutes: parse_eta_minutes(&eta_text),
            distance_km: parse_distance_km(&distance_text),
            eta_text,
            distance_text,
            polyline: polyline.into(),
            label: label.into(),
        }
    }

    pub fn eta_text(&self) -> &str {
        &self.eta_text
    }

    pub fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    pub fn polyline(&self) -> &str {
        &self.polyline
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
