pub mod cache;
pub mod directions_provider;
pub mod error;
pub mod google_directions_api;
pub mod traffic_client;
