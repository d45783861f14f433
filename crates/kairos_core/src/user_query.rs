use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    fuel::{
        DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER, DEFAULT_FUEL_PRICE_PER_LITER,
        MAX_FUEL_EFFICIENCY_KM_PER_LITER, MAX_FUEL_PRICE_PER_LITER,
        MIN_FUEL_EFFICIENCY_KM_PER_LITER, MIN_FUEL_PRICE_PER_LITER,
    },
    travel_mode::TravelMode,
};

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Start location is required")]
    MissingOrigin,

    #[error("Destination is required")]
    MissingDestination,

    #[error(
        "Fuel price must be between {min} and {max}, got {0}",
        min = MIN_FUEL_PRICE_PER_LITER,
        max = MAX_FUEL_PRICE_PER_LITER
    )]
    FuelPriceOutOfRange(f64),

    #[error(
        "Fuel efficiency must be between {min} and {max} km/l, got {0}",
        min = MIN_FUEL_EFFICIENCY_KM_PER_LITER,
        max = MAX_FUEL_EFFICIENCY_KM_PER_LITER
    )]
    FuelEfficiencyOutOfRange(f64),
}

/// What the user asked for in one submission.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub mode: TravelMode,
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_liter: f64,
    #[serde(default = "default_fuel_efficiency")]
    pub fuel_efficiency_km_per_liter: f64,
}

fn default_fuel_price() -> f64 {
    DEFAULT_FUEL_PRICE_PER_LITER
}

fn default_fuel_efficiency() -> f64 {
    DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER
}

impl UserQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, mode: TravelMode) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
            fuel_efficiency_km_per_liter: DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER,
        }
    }

    pub fn with_fuel(mut self, price_per_liter: f64, km_per_liter: f64) -> Self {
        self.fuel_price_per_liter = price_per_liter;
        self.fuel_efficiency_km_per_liter = km_per_liter;
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.origin.trim().is_empty() {
            return Err(QueryError::MissingOrigin);
        }

        if self.destination.trim().is_empty() {
            return Err(QueryError::MissingDestination);
        }

        if !(MIN_FUEL_PRICE_PER_LITER..=MAX_FUEL_PRICE_PER_LITER)
            .contains(&self.fuel_price_per_liter)
        {
            return Err(QueryError::FuelPriceOutOfRange(self.fuel_price_per_liter));
        }

        if !(MIN_FUEL_EFFICIENCY_KM_PER_LITER..=MAX_FUEL_EFFICIENCY_KM_PER_LITER)
            .contains(&self.fuel_efficiency_km_per_liter)
        {
            return Err(QueryError::FuelEfficiencyOutOfRange(
                self.fuel_efficiency_km_per_liter,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query: UserQuery =
            serde_json::from_str(r#"{"origin": "Ahmedabad", "destination": "Mumbai"}"#).unwrap();

        assert_eq!(query.mode, TravelMode::Driving);
        assert_eq!(query.fuel_price_per_liter, 100.0);
        assert_eq!(query.fuel_efficiency_km_per_liter, 15.0);
        assert_eq!(query.validate(), Ok(()));
    }

    #[test]
    fn test_missing_locations() {
        let query = UserQuery::new("  ", "Mumbai", TravelMode::Walking);
        assert_eq!(query.validate(), Err(QueryError::MissingOrigin));

        let query = UserQuery::new("Ahmedabad", "", TravelMode::Walking);
        assert_eq!(query.validate(), Err(QueryError::MissingDestination));
    }

    #[test]
    fn test_fuel_bounds() {
        let query = UserQuery::new("A", "B", TravelMode::Driving).with_fuel(49.0, 15.0);
        assert_eq!(query.validate(), Err(QueryError::FuelPriceOutOfRange(49.0)));

        let query = UserQuery::new("A", "B", TravelMode::Driving).with_fuel(200.0, 51.0);
        assert_eq!(
            query.validate(),
            Err(QueryError::FuelEfficiencyOutOfRange(51.0))
        );

        let query = UserQuery::new("A", "B", TravelMode::Driving).with_fuel(50.0, 5.0);
        assert_eq!(query.validate(), Ok(()));
    }
}
