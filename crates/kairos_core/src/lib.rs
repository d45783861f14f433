pub mod distance;
pub mod error;
pub mod eta;
pub mod fuel;
pub mod route_candidate;
pub mod selector;
pub mod travel_mode;
pub mod trend_sample;
pub mod user_query;
