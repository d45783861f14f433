use kairos_core::{travel_mode::TravelMode, user_query::QueryError};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema, Debug)]
pub struct RouteQueryParams {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub mode: TravelMode,
}

impl RouteQueryParams {
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.origin.trim().is_empty() {
            return Err(QueryError::MissingOrigin);
        }

        if self.destination.trim().is_empty() {
            return Err(QueryError::MissingDestination);
        }

        Ok(())
    }
}
