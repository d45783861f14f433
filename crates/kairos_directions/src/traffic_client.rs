use std::sync::Arc;

use futures::future::join_all;
use jiff::{SignedDuration, Zoned};
use kairos_core::{
    route_candidate::RouteCandidate, travel_mode::TravelMode, trend_sample::TrendSample,
};
use tracing::{debug, warn};

use crate::{
    directions_provider::{Departure, DirectionsProvider, DirectionsRequest, DirectionsRoute},
    error::DirectionsError,
};

/// Number of hourly departures sampled for the trend, starting now.
pub const TREND_HOURS: i64 = 6;

const TREND_TIME_FORMAT: &str = "%H:%M";

pub struct TrafficClient {
    provider: Arc<dyn DirectionsProvider>,
}

impl TrafficClient {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        Self { provider }
    }

    /// Candidate routes departing now, alternatives included, in the order
    /// the service returned them. No route at all is an error.
    pub async fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<RouteCandidate>, DirectionsError> {
        let request = DirectionsRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
            departure: Departure::Now,
            alternatives: true,
        };

        let routes = self.provider.directions(&request).await?;

        if routes.is_empty() {
            return Err(DirectionsError::NoRoutes);
        }

        routes
            .iter()
            .map(|route| route_candidate(route, mode))
            .collect()
    }

    pub async fn fetch_trend(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Vec<TrendSample> {
        self.fetch_trend_from(&Zoned::now(), origin, destination, mode)
            .await
    }

    /// Predicted ETA for each of the next [`TREND_HOURS`] hourly departures
    /// from `start`. Departures whose request fails are left out, the others
    /// keep their chronological order.
    pub async fn fetch_trend_from(
        &self,
        start: &Zoned,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Vec<TrendSample> {
        let departures: Vec<Zoned> = (0..TREND_HOURS)
            .filter_map(|offset| start.checked_add(SignedDuration::from_hours(offset)).ok())
            .collect();

        let samples = departures
            .iter()
            .map(|departure| self.fetch_sample(departure, origin, destination, mode));

        let samples: Vec<TrendSample> = join_all(samples).await.into_iter().flatten().collect();

        debug!(
            "Trend {} -> {}: {}/{} samples",
            origin,
            destination,
            samples.len(),
            TREND_HOURS
        );

        samples
    }

    async fn fetch_sample(
        &self,
        departure: &Zoned,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Option<TrendSample> {
        let timestamp = departure.strftime(TREND_TIME_FORMAT).to_string();

        let request = DirectionsRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
            departure: Departure::At(departure.timestamp()),
            alternatives: false,
        };

        let routes = match self.provider.directions(&request).await {
            Ok(routes) => routes,
            Err(error) => {
                warn!("Error fetching traffic trend at {}: {}", timestamp, error);
                return None;
            }
        };

        let Some(leg) = routes.first().and_then(|route| route.legs.first()) else {
            warn!("No route for traffic trend at {}", timestamp);
            return None;
        };

        let eta_minutes = leg.duration_for(mode).value / 60.0;

        Some(TrendSample::new(timestamp, eta_minutes))
    }
}

fn route_candidate(
    route: &DirectionsRoute,
    mode: TravelMode,
) -> Result<RouteCandidate, DirectionsError> {
    let leg = route
        .legs
        .first()
        .ok_or(DirectionsError::IncompleteResponse("route legs"))?;

    Ok(RouteCandidate::new(
        leg.duration_for(mode).text.as_str(),
        leg.distance.text.as_str(),
        route.overview_polyline.as_str(),
        route.summary.as_str(),
    ))
}
