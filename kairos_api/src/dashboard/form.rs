use kairos_core::{
    fuel::{DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER, DEFAULT_FUEL_PRICE_PER_LITER},
    travel_mode::TravelMode,
    user_query::UserQuery,
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// Query string of the sidebar form submission. A cleared number input is
/// submitted as an empty value and falls back to the default.
#[serde_as]
#[derive(Deserialize, Debug, Default)]
pub struct DashboardForm {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub mode: TravelMode,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub fuel_price: Option<f64>,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub fuel_efficiency: Option<f64>,
}

impl DashboardForm {
    pub fn into_query(self) -> UserQuery {
        UserQuery::new(self.origin, self.destination, self.mode).with_fuel(
            self.fuel_price.unwrap_or(DEFAULT_FUEL_PRICE_PER_LITER),
            self.fuel_efficiency
                .unwrap_or(DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER),
        )
    }
}
