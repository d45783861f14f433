use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("No route candidates to select from")]
    NoCandidates,

    #[error("Could not read a distance from \"{0}\"")]
    InvalidDistance(String),

    #[error("Fuel efficiency must be positive, got {0}")]
    InvalidFuelEfficiency(f64),

    #[error("Unknown travel mode \"{0}\"")]
    UnknownTravelMode(String),
}
