use crate::{distance::parse_distance_km, error::RouteError};

pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 100.0;
pub const MIN_FUEL_PRICE_PER_LITER: f64 = 50.0;
pub const MAX_FUEL_PRICE_PER_LITER: f64 = 200.0;

pub const DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER: f64 = 15.0;
pub const MIN_FUEL_EFFICIENCY_KM_PER_LITER: f64 = 5.0;
pub const MAX_FUEL_EFFICIENCY_KM_PER_LITER: f64 = 50.0;

/// Estimated fuel cost of driving the distance described by `distance_text`.
pub fn estimate_fuel_cost(
    distance_text: &str,
    price_per_liter: f64,
    km_per_liter: f64,
) -> Result<f64, RouteError> {
    if km_per_liter <= 0.0 || !km_per_liter.is_finite() {
        return Err(RouteError::InvalidFuelEfficiency(km_per_liter));
    }

    let distance_km = parse_distance_km(distance_text)
        .ok_or_else(|| RouteError::InvalidDistance(distance_text.to_string()))?;

    Ok((distance_km / km_per_liter) * price_per_liter)
}
