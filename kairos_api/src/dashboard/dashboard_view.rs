use kairos_core::{
    eta::format_eta_minutes,
    fuel::estimate_fuel_cost,
    route_candidate::RouteCandidate,
    selector::rank_by_eta,
    travel_mode::TravelMode,
    trend_sample::TrendSample,
    user_query::UserQuery,
};
use kairos_directions::cache::RouteQueryKey;
use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::state::AppState;

use super::{
    insights::{TrendInsights, round_eta},
    map_overlay::MapOverlay,
};

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("Invalid locations. Please enter valid city names!")]
    InvalidLocations,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct FastestRoute {
    pub label: String,
    pub eta_minutes: u32,
    pub eta_display: String,
    pub distance_text: String,
    /// `None` when the distance could not be read
    pub estimated_fuel_cost: Option<f64>,
}

impl FastestRoute {
    fn new(route: &RouteCandidate, query: &UserQuery) -> Self {
        let estimated_fuel_cost = estimate_fuel_cost(
            route.distance_text(),
            query.fuel_price_per_liter,
            query.fuel_efficiency_km_per_liter,
        )
        .inspect_err(|error| warn!("No fuel estimate for {}: {}", route.label(), error))
        .ok();

        FastestRoute {
            label: route.label().to_string(),
            eta_minutes: route.eta_minutes(),
            eta_display: format_eta_minutes(route.eta_minutes()),
            distance_text: route.distance_text().to_string(),
            estimated_fuel_cost,
        }
    }
}

/// Everything the results page shows for one query.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub query: UserQuery,
    pub fastest_route: FastestRoute,
    /// All candidates, fastest first
    pub routes: Vec<RouteCandidate>,
    pub map: MapOverlay,
    /// ETAs rounded to 2 decimals
    pub trend: Vec<TrendSample>,
    pub insights: Option<TrendInsights>,
}

/// Memoized route lookup for the exact query inputs, ranked fastest first.
pub async fn ranked_routes(
    state: &AppState,
    origin: &str,
    destination: &str,
    mode: TravelMode,
) -> Result<Vec<RouteCandidate>, DashboardError> {
    let key = RouteQueryKey::new(origin, destination, mode);

    let routes = state
        .route_cache
        .get_or_fetch(key, || {
            state
                .traffic_client
                .fetch_routes(origin, destination, mode)
        })
        .await
        .map_err(|error| {
            warn!("Error fetching traffic data: {}", error);
            DashboardError::InvalidLocations
        })?;

    Ok(rank_by_eta(routes))
}

/// Hourly trend with ETAs rounded to 2 decimals, as charted and analysed.
pub async fn rounded_trend(
    state: &AppState,
    origin: &str,
    destination: &str,
    mode: TravelMode,
) -> Vec<TrendSample> {
    state
        .traffic_client
        .fetch_trend(origin, destination, mode)
        .await
        .into_iter()
        .map(|sample| TrendSample::new(sample.timestamp, round_eta(sample.eta_minutes)))
        .collect()
}

/// Runs a submitted query: routes first, then the trend.
pub async fn build_dashboard(
    state: &AppState,
    query: &UserQuery,
) -> Result<DashboardView, DashboardError> {
    let routes = ranked_routes(state, &query.origin, &query.destination, query.mode).await?;

    let fastest = routes.first().ok_or(DashboardError::InvalidLocations)?;
    let fastest_route = FastestRoute::new(fastest, query);
    let map = MapOverlay::from_polyline(fastest.polyline());

    info!(
        "Fastest route {} -> {} ({}): {} in {}",
        query.origin, query.destination, query.mode, fastest_route.label, fastest_route.eta_display
    );

    let trend = rounded_trend(state, &query.origin, &query.destination, query.mode).await;
    let insights = TrendInsights::from_samples(&trend);

    Ok(DashboardView {
        query: query.clone(),
        fastest_route,
        routes,
        map,
        trend,
        insights,
    })
}
