use kairos_directions::{cache::RouteCache, traffic_client::TrafficClient};

pub struct AppState {
    pub traffic_client: TrafficClient,
    pub route_cache: RouteCache,
}
