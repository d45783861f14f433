use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use kairos_core::eta::parse_eta_minutes;
use kairos_directions::{
    cache::RouteCache,
    directions_provider::{
        Departure, DirectionsLeg, DirectionsProvider, DirectionsRequest, DirectionsRoute,
        TextValue,
    },
    error::DirectionsError,
    traffic_client::TrafficClient,
};

use crate::state::AppState;

/// A route whose duration value matches its displayed ETA.
pub fn fake_route(summary: &str, eta: &str, distance: &str, polyline: &str) -> DirectionsRoute {
    let seconds = f64::from(parse_eta_minutes(eta)) * 60.0;

    DirectionsRoute {
        summary: summary.to_string(),
        legs: vec![DirectionsLeg {
            duration: TextValue::new(eta, seconds),
            duration_in_traffic: Some(TextValue::new(eta, seconds)),
            distance: TextValue::new(distance, 0.0),
        }],
        overview_polyline: polyline.to_string(),
    }
}

/// Answers every request with the same routes, and counts the route lookups.
pub struct FakeDirectionsProvider {
    routes: Vec<DirectionsRoute>,
    failing: bool,
    trend_available: bool,
    route_requests: AtomicUsize,
}

impl FakeDirectionsProvider {
    pub fn new(routes: Vec<DirectionsRoute>) -> Self {
        Self {
            routes,
            failing: false,
            trend_available: true,
            route_requests: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(vec![])
        }
    }

    /// Departures in the future fail, departures "now" still answer.
    pub fn without_trend(self) -> Self {
        Self {
            trend_available: false,
            ..self
        }
    }

    pub fn route_requests(&self) -> usize {
        self.route_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for FakeDirectionsProvider {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError> {
        if request.departure == Departure::Now {
            self.route_requests.fetch_add(1, Ordering::SeqCst);
        }

        let unavailable = matches!(request.departure, Departure::At(_)) && !self.trend_available;

        if self.failing || unavailable {
            return Err(DirectionsError::Api {
                status: String::from("UNKNOWN_ERROR"),
                message: String::from("fake provider failure"),
            });
        }

        Ok(self.routes.clone())
    }
}

pub fn test_state(provider: FakeDirectionsProvider) -> (Arc<AppState>, Arc<FakeDirectionsProvider>) {
    let provider = Arc::new(provider);

    let state = Arc::new(AppState {
        traffic_client: TrafficClient::new(provider.clone()),
        route_cache: RouteCache::default(),
    });

    (state, provider)
}
