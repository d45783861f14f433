pub mod get_geometry;
pub mod get_routes;
pub mod get_trend;
pub mod post_dashboard;
pub mod route_query;
pub mod routes;
