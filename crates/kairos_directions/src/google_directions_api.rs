use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{
    directions_provider::{
        Departure, DirectionsLeg, DirectionsProvider, DirectionsRequest, DirectionsRoute,
    },
    error::DirectionsError,
};

pub const GOOGLE_DIRECTIONS_API_URL: &str =
    "https://maps.googleapis.com/maps/api/directions/json";

const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

const TRAFFIC_MODEL: &str = "best_guess";

#[derive(Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Deserialize)]
struct GoogleRoute {
    #[serde(default)]
    summary: String,
    legs: Vec<DirectionsLeg>,
    overview_polyline: OverviewPolyline,
}

impl From<GoogleRoute> for DirectionsRoute {
    fn from(route: GoogleRoute) -> Self {
        DirectionsRoute {
            summary: route.summary,
            legs: route.legs,
            overview_polyline: route.overview_polyline.points,
        }
    }
}

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<GoogleRoute>,
}

pub struct GoogleDirectionsClientParams {
    pub api_key: String,
    pub url: String,
}

impl GoogleDirectionsClientParams {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            url: GOOGLE_DIRECTIONS_API_URL.to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|_| anyhow::anyhow!("{} is not set", API_KEY_ENV_VAR))?;

        Ok(Self::new(api_key))
    }
}

pub struct GoogleDirectionsClient {
    params: GoogleDirectionsClientParams,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    pub fn new(params: GoogleDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Http { status, message });
        }

        let text = response.text().await?;
        parse_directions_response(&text)
    }
}

fn departure_param(departure: Departure) -> String {
    match departure {
        Departure::Now => String::from("now"),
        Departure::At(timestamp) => timestamp.as_second().to_string(),
    }
}

/// Statuses other than `OK` and the "nothing found" ones are errors.
fn parse_directions_response(text: &str) -> Result<Vec<DirectionsRoute>, DirectionsError> {
    let response: DirectionsResponse = serde_json::from_str(text)?;

    match response.status.as_str() {
        "OK" => Ok(response.routes.into_iter().map(DirectionsRoute::from).collect()),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(vec![]),
        _ => Err(DirectionsError::Api {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        }),
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<Vec<DirectionsRoute>, DirectionsError> {
        let departure_time = departure_param(request.departure);
        let alternatives = if request.alternatives { "true" } else { "false" };

        debug!(
            "GoogleDirectionsApi: {} -> {} ({}, departure {})",
            request.origin, request.destination, request.mode, departure_time
        );

        let response = self
            .client
            .get(&self.params.url)
            .query(&[
                ("origin", request.origin.as_str()),
                ("destination", request.destination.as_str()),
                ("mode", request.mode.as_str()),
                ("traffic_model", TRAFFIC_MODEL),
                ("alternatives", alternatives),
                ("departure_time", departure_time.as_str()),
                ("key", self.params.api_key.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    const OK_RESPONSE: &str = r#"{
        "status": "OK",
        "routes": [
            {
                "summary": "NH 48",
                "legs": [
                    {
                        "duration": { "text": "8 hours 40 mins", "value": 31200 },
                        "duration_in_traffic": { "text": "9 hours 2 mins", "value": 32520 },
                        "distance": { "text": "524 km", "value": 524000 }
                    }
                ],
                "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC" }
            },
            {
                "summary": "Mumbai - Ahmedabad Expy",
                "legs": [
                    {
                        "duration": { "text": "9 hours 1 min", "value": 32460 },
                        "distance": { "text": "1,012 km", "value": 1012000 }
                    }
                ],
                "overview_polyline": { "points": "_mqNvxq`@" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_ok_response() {
        let routes = parse_directions_response(OK_RESPONSE).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].summary, "NH 48");
        assert_eq!(routes[0].overview_polyline, "_p~iF~ps|U_ulLnnqC");
        assert_eq!(
            routes[0].legs[0].duration_in_traffic.as_ref().unwrap().text,
            "9 hours 2 mins"
        );
        assert_eq!(routes[1].legs[0].duration_in_traffic, None);
        assert_eq!(routes[1].legs[0].distance.text, "1,012 km");
    }

    #[test]
    fn test_parse_zero_results() {
        let routes =
            parse_directions_response(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#).unwrap();
        assert!(routes.is_empty());

        let routes = parse_directions_response(r#"{ "status": "NOT_FOUND" }"#).unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_parse_api_error() {
        let result = parse_directions_response(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "routes": [] }"#,
        );

        match result {
            Err(DirectionsError::Api { status, message }) => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            _ => panic!("expected an API error"),
        }
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            parse_directions_response("<html>"),
            Err(DirectionsError::Deserialize(_))
        ));
    }

    #[test]
    fn test_departure_param() {
        assert_eq!(departure_param(Departure::Now), "now");

        let timestamp: Timestamp = "2025-06-10T08:00:00Z".parse().unwrap();
        assert_eq!(departure_param(Departure::At(timestamp)), "1749542400");
    }
}
